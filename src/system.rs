use std::os::unix::io::RawFd;

/// Safe wrapper for isatty() - checks if file descriptor is a terminal
pub fn is_tty(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Safe wrapper for getpgrp() - returns the calling process's group
pub fn process_group() -> i32 {
    unsafe { libc::getpgrp() }
}

/// Safe wrapper for tcgetpgrp() - returns the foreground process group of the
/// terminal behind `fd`.
///
/// The raw value is returned unchanged, so `-1` comes back when `fd` has no
/// controlling terminal.
pub fn foreground_process_group(fd: RawFd) -> i32 {
    unsafe { libc::tcgetpgrp(fd) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_process_group() {
        let pgrp = process_group();
        assert!(pgrp > 0, "PGRP should be positive");
    }

    #[test]
    fn test_regular_file_is_not_tty() {
        let file = tempfile::tempfile().unwrap();
        assert!(!is_tty(file.as_raw_fd()));
    }

    #[test]
    fn test_foreground_process_group_without_terminal() {
        let file = tempfile::tempfile().unwrap();
        assert_eq!(foreground_process_group(file.as_raw_fd()), -1);
    }

    #[test]
    fn test_foreground_process_group_bad_fd() {
        assert_eq!(foreground_process_group(-1), -1);
    }
}
