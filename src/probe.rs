use std::os::unix::io::RawFd;

use crate::system;

/// One of the three standard streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdin,
    Stdout,
    Stderr,
}

impl Stream {
    /// Input, output, error
    pub const ALL: [Stream; 3] = [Stream::Stdin, Stream::Stdout, Stream::Stderr];

    pub fn fd(self) -> RawFd {
        match self {
            Stream::Stdin => libc::STDIN_FILENO,
            Stream::Stdout => libc::STDOUT_FILENO,
            Stream::Stderr => libc::STDERR_FILENO,
        }
    }

}

/// Which streams a probe run reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    StdoutOnly,
    AllStreams,
}

impl Variant {
    pub fn streams(self) -> &'static [Stream] {
        static STDOUT_ONLY: [Stream; 1] = [Stream::Stdout];
        static ALL: [Stream; 3] = Stream::ALL;

        match self {
            Variant::StdoutOnly => &STDOUT_ONLY,
            Variant::AllStreams => &ALL,
        }
    }
}

/// Terminal and process-group state observed once at startup.
///
/// `tc_pgrp` is the foreground group of stdout's terminal exactly as the
/// kernel reported it, including `-1` when stdout has no terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    pub attachments: Vec<(Stream, bool)>,
    pub pgrp: i32,
    pub tc_pgrp: i32,
}

impl TerminalState {
    pub fn capture(variant: Variant) -> Self {
        let attachments = variant
            .streams()
            .iter()
            .map(|&stream| (stream, system::is_tty(stream.fd())))
            .collect();

        TerminalState {
            attachments,
            pgrp: system::process_group(),
            tc_pgrp: system::foreground_process_group(Stream::Stdout.fd()),
        }
    }

    /// Attachment flag for `stream`, `None` if it wasn't probed
    pub fn is_attached(&self, stream: Stream) -> Option<bool> {
        self.attachments
            .iter()
            .find(|(s, _)| *s == stream)
            .map(|&(_, attached)| attached)
    }

    /// True when stdout is a terminal and we own its foreground.
    ///
    /// This is the gate progress meters (scp, rsync) use before drawing.
    pub fn can_output(&self) -> bool {
        self.is_attached(Stream::Stdout).unwrap_or(false) && self.pgrp == self.tc_pgrp
    }
}
