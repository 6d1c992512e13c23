use crate::probe::TerminalState;
use std::io::Write;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        ReportFormatter
    }

    /// Writes the two report lines: attachment flags, then the pgrp pair.
    pub fn write_report<W: Write>(&self, err: &mut W, state: &TerminalState) -> std::io::Result<()> {
        let flags: Vec<&str> = state
            .attachments
            .iter()
            .map(|&(_, attached)| if attached { "1" } else { "0" })
            .collect();

        writeln!(err, "isatty reports {}", flags.join("/"))?;
        writeln!(err, "pgrps are {} and {}", state.pgrp, state.tc_pgrp)?;
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
