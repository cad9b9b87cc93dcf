use crate::core::SortArtifacts;
use colored::*;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()>;
}

/// Formats a slice the way the trace displays arrays: `[4, 2, 2, 8]`.
pub fn format_array<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(artifacts)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_input(artifacts)?;
        self.write_frequency(artifacts)?;
        self.write_cumulative(artifacts)?;
        self.write_placements(artifacts)?;
        self.write_result(artifacts)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Counting Sort Report")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_input(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "## Input")?;
        writeln!(self.writer)?;
        self.write_array_table(&artifacts.input)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Maximum element: **{}**",
            artifacts.max_value
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_frequency(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "## Frequency Table")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Value | Occurrences |")?;
        writeln!(self.writer, "|-------|-------------|")?;
        for (value, &count) in artifacts.frequency.iter().enumerate() {
            if count > 0 {
                writeln!(self.writer, "| {value} | {count} |")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cumulative(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cumulative Table")?;
        writeln!(self.writer)?;
        self.write_array_table(&artifacts.cumulative)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_placements(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "## Placement")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Scan order | Value | Position |")?;
        writeln!(self.writer, "|------------|-------|----------|")?;
        for (i, step) in artifacts.placement_steps()?.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                i + 1,
                step.value,
                step.position
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_result(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sorted Output")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "`{}`", format_array(&artifacts.sorted))?;
        Ok(())
    }

    fn write_array_table<T: Display>(&mut self, values: &[T]) -> anyhow::Result<()> {
        let indices: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
        let cells: Vec<String> = values.iter().map(ToString::to_string).collect();
        writeln!(self.writer, "| Index | {} |", indices.join(" | "))?;
        writeln!(
            self.writer,
            "|{}|",
            vec!["---"; values.len() + 1].join("|")
        )?;
        writeln!(self.writer, "| Value | {} |", cells.join(" | "))?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        self.write_banner()?;
        self.write_input(artifacts)?;
        self.write_maximum(artifacts)?;
        self.write_frequency(artifacts)?;
        self.write_cumulative(artifacts)?;
        self.write_placements(artifacts)?;
        self.write_result(artifacts)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_banner(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            "═══════════════════════════════════════════".blue()
        )?;
        writeln!(
            self.writer,
            "{}",
            "           COUNTING SORT TRACE".bold().blue()
        )?;
        writeln!(
            self.writer,
            "{}",
            "═══════════════════════════════════════════".blue()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_input(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "STEP 1: INPUT RECEIVED".bold())?;
        writeln!(
            self.writer,
            "  Original array: {}",
            format_array(&artifacts.input)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_maximum(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "STEP 2: FIND MAXIMUM ELEMENT".bold())?;
        writeln!(
            self.writer,
            "  Maximum element found: {}",
            artifacts.max_value.to_string().yellow()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_frequency(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "STEP 3: FREQUENCY COUNT PHASE".bold())?;
        for (value, &count) in artifacts.frequency.iter().enumerate() {
            if count > 0 {
                writeln!(self.writer, "  Value {value} occurs {count} times")?;
            }
        }
        writeln!(
            self.writer,
            "  Frequency array: {}",
            format_array(&artifacts.frequency)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cumulative(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "STEP 4: CUMULATIVE COUNT PHASE".bold())?;
        writeln!(self.writer, "  Formula: Count[i] = Count[i] + Count[i-1]")?;
        for i in 1..artifacts.cumulative.len() {
            writeln!(
                self.writer,
                "  Index {i}: Count[{i}] = {} + {} = {}",
                artifacts.frequency[i],
                artifacts.cumulative[i - 1],
                artifacts.cumulative[i]
            )?;
        }
        writeln!(
            self.writer,
            "  Cumulative array: {}",
            format_array(&artifacts.cumulative)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_placements(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            "STEP 5: OUTPUT CONSTRUCTION PHASE".bold()
        )?;
        for step in artifacts.placement_steps()? {
            writeln!(
                self.writer,
                "  Placing {} at position {}, updated count for {} to {}",
                step.value, step.position, step.value, step.position
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_result(&mut self, artifacts: &SortArtifacts) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  Sorted array: {}",
            format_array(&artifacts.sorted).green()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            "✓ Sorting completed successfully".green()
        )?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
