//! Classify a wind speed and show where it sits in the legend.

use crate::track::{classify_intensity, CategoryLabel};

pub fn classify(knots: u16) -> CategoryLabel {
    let label = classify_intensity(knots);

    println!("{}KT: {}", knots, label);
    for band in CategoryLabel::ALL.iter().rev() {
        let marker = if *band == label { ">" } else { " " };
        println!(" {} {}", marker, band);
    }

    label
}
