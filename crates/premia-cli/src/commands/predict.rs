//! Predict Command Implementation
//!
//! Runs a single prediction from the terminal and prints the same card the
//! web form renders: a point estimate, the likely range, and an echo of the
//! inputs.

use anyhow::{Context, Result};
use clap::Args;
use premia_model::ModelArtifact;
use premia_serving::{
    display, PredictionRequest, PredictionResult, Predictor, Region, Sex, SmokerStatus,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Run a single prediction from the terminal
///
/// # Example
///
/// ```bash
/// premia predict \
///     --artifact artifacts/insurance.json \
///     --age 45 --bmi 31.5 --children 2 \
///     --sex female --smoker no --region northwest
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Path to the model artifact
    #[arg(long, default_value = "artifacts/insurance.json")]
    pub artifact: PathBuf,

    /// Age in years (18-100)
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Body mass index (10.0-50.0)
    #[arg(long, default_value_t = 25.0)]
    pub bmi: f64,

    /// Number of dependent children (0-5)
    #[arg(long, default_value_t = 0)]
    pub children: u32,

    /// Sex: male or female
    #[arg(long, default_value = "male")]
    pub sex: Sex,

    /// Smoking status: yes or no
    #[arg(long, default_value = "yes")]
    pub smoker: SmokerStatus,

    /// Region of residence: southeast, southwest, northeast, or northwest
    #[arg(long, default_value = "southeast")]
    pub region: Region,
}

impl PredictCommand {
    /// Execute the predict command
    pub fn run(&self) -> Result<()> {
        let request = self.to_request();

        let artifact = ModelArtifact::load(&self.artifact).with_context(|| {
            format!(
                "Failed to load model artifact from {} (run `premia init` to create one)",
                self.artifact.display()
            )
        })?;
        let predictor = Predictor::new(Arc::new(artifact));

        let result = predictor.predict(&request).context("Prediction failed")?;
        print!("{}", report(&request, &result));
        Ok(())
    }

    fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            age: self.age,
            bmi: self.bmi,
            children: self.children,
            sex: self.sex,
            smoker: self.smoker,
            region: self.region,
        }
    }
}

/// Render the prediction card and input table as a single string.
fn report(request: &PredictionRequest, result: &PredictionResult) -> String {
    let (point, range) = display::result_lines(result);
    let card = [
        "Estimated annual medical charges".to_string(),
        String::new(),
        point,
        format!("Range: {range}"),
    ];

    // En dash and box-drawing characters are one column wide, so char
    // counts are safe for padding here.
    let width = card.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;

    let mut out = String::new();
    out.push_str(&format!("\u{250c}{}\u{2510}\n", "\u{2500}".repeat(width)));
    for line in &card {
        let pad = width - 2 - line.chars().count();
        out.push_str(&format!("\u{2502} {}{} \u{2502}\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(width)));

    out.push('\n');
    for (label, value) in display::input_summary(request) {
        out.push_str(&format!("  {label:<9} {value}\n"));
    }
    out
}
