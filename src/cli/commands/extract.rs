use reqclass::extract_label;

use crate::cli::ui;

pub fn execute(text: &str) {
    let label = extract_label(text);
    println!("{}", ui::colored_label(label));
}
