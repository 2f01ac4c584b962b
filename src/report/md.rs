use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# ATS Score Report\n\n");
    if let Some(source) = &report.source {
        output.push_str(&format!("Source: {source}\n\n"));
    }
    output.push_str(&format!("ATS score: {:.2}\n\n", report.ats_score));
    output.push_str(&format!(
        "Similarity method: {}\n\n",
        report.similarity_method
    ));

    output.push_str("## Breakdown\n\n");
    for (key, value) in report.breakdown.entries() {
        output.push_str(&format!("- {key}: {value}\n"));
    }
    output.push('\n');

    output.push_str("## Skills\n\n");
    if report.parsed_skills.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str(&format!("{}\n\n", report.parsed_skills.as_slice().join(", ")));
    }

    output.push_str("## Feedback\n\n");
    for line in &report.feedback {
        output.push_str(&format!("- {line}\n"));
    }
    output.push_str(&format!("\nInput digest: {}\n", report.input_digest));

    output
}
