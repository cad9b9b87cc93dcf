use crate::core;
use crate::formatting::FormattingConfig;
use crate::io::input::{self, parse_sequence};
use crate::io::output::{create_writer, OutputFormat};
use crate::render;
use anyhow::Result;
use std::path::PathBuf;

pub struct SortConfig {
    pub values: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub diagram: Option<PathBuf>,
    pub no_diagram: bool,
    pub formatting: FormattingConfig,
}

/// Runs one sort end to end: acquire input, run the pipeline, write the
/// report, render the diagram.
///
/// A reporting failure aborts the run; a diagram failure is downgraded to
/// a warning because the sort result is already complete and correct.
pub fn handle_sort(config: SortConfig) -> Result<()> {
    config.formatting.apply();

    let input = acquire_input(&config.values)?;
    let artifacts = core::sort(&input)?;

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&artifacts)?;

    if show_inline_diagram(&config) {
        println!("{}", render::render_diagram(&artifacts));
    }

    if let Some(path) = &config.diagram {
        match render::save_diagram(path, &artifacts) {
            Ok(()) => println!("Diagram saved as '{}'", path.display()),
            Err(err) => {
                log::warn!("could not save diagram to {}: {err}", path.display());
                eprintln!(
                    "warning: could not save diagram to {}: {err}",
                    path.display()
                );
            }
        }
    }

    Ok(())
}

// The inline diagram belongs to the human-readable trace on stdout; json
// and markdown reports, and reports redirected to a file, go without it.
fn show_inline_diagram(config: &SortConfig) -> bool {
    config.format == OutputFormat::Terminal && config.output.is_none() && !config.no_diagram
}

fn acquire_input(values: &[String]) -> Result<Vec<u64>> {
    if values.is_empty() {
        let stdin = std::io::stdin();
        input::read_interactive(&mut stdin.lock(), &mut std::io::stdout())
    } else {
        parse_sequence(&values.join(" ")).map_err(anyhow::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(format: OutputFormat, output: Option<PathBuf>, no_diagram: bool) -> SortConfig {
        SortConfig {
            values: vec!["1".to_string()],
            format,
            output,
            diagram: None,
            no_diagram,
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_inline_diagram_only_for_terminal_stdout() {
        assert!(show_inline_diagram(&config_with(
            OutputFormat::Terminal,
            None,
            false
        )));
        assert!(!show_inline_diagram(&config_with(
            OutputFormat::Terminal,
            None,
            true
        )));
        assert!(!show_inline_diagram(&config_with(
            OutputFormat::Json,
            None,
            false
        )));
        assert!(!show_inline_diagram(&config_with(
            OutputFormat::Terminal,
            Some(PathBuf::from("report.txt")),
            false
        )));
    }

    #[test]
    fn test_acquire_input_parses_arguments() {
        let values = vec!["4".to_string(), "2".to_string()];
        assert_eq!(acquire_input(&values).unwrap(), vec![4, 2]);
    }

    #[test]
    fn test_acquire_input_surfaces_boundary_errors() {
        let values = vec!["-1".to_string(), "2".to_string()];
        let err = acquire_input(&values).unwrap_err();
        assert!(err.to_string().contains("negative numbers (-1)"));
    }
}
