use std::io::Write;

use denorm_eval::EvaluationReport;

pub fn write_report(writer: &mut dyn Write, report: &EvaluationReport) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|err| format!("Failed to serialize report JSON: {err}"))?;
    writer
        .write_all(b"\n")
        .map_err(|err| format!("Failed to finalize report output: {err}"))?;
    Ok(())
}
