use ndarray::{array, Array1, Array2};

use crate::{experiment::load_labeled_csv, Result};

pub const CLASSIFICATION_CSV: &str = "./data/classification.csv";

pub fn setup_classification_csv() -> Result<(Array2<f64>, Array1<usize>)> {
    // Reads data from file "data/classification.csv", label column "target"
    load_labeled_csv(CLASSIFICATION_CSV, "target")
}

pub fn setup_data_hardcoded() -> (Array2<f64>, Array1<usize>) {
    // Two overlapping clusters in the plane
    let x = array![
        [1.99591859675606, -1.00591398212174],
        [-0.290104994456985, -0.507165037206491],
        [-0.392657438987142, 1.41894909677495],
        [0.541774508623095, 0.134065164928921],
        [0.981026718908818, 0.29864258176132],
        [2.14226826821187, -1.57541477899575],
        [0.614259969810645, -1.11273947093321],
        [-0.747582520955759, 0.742939152591961],
        [0.367035148375779, 0.629260294753607],
        [-2.90764791321527, 1.81674051159666],
        [-1.27652692983198, -1.94290907058012],
        [2.5208012003232, -0.871450106365531],
        [0.272189306719476, 1.01227462627796],
        [-0.356579330585395, 0.481004283284028],
    ];
    let y = array![1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0];
    (x, y)
}

pub fn setup_line_hardcoded() -> (Array1<f64>, Array1<f64>) {
    // y = 0.5 x + 0.3 plus a little noise
    let x = array![0.1, 0.6, 1.2, 1.9, 2.4, 3.1, 3.5, 4.2, 4.8];
    let y = array![0.41, 0.55, 0.93, 1.22, 1.48, 1.9, 2.01, 2.42, 2.66];
    (x, y)
}
