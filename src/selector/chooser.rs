//! The chooser subprocess.
//!
//! A chooser session is a single request/response exchange: the whole
//! candidate list is written to its stdin, then its stdout is collected once
//! it exits. An optional timeout kills a chooser that never returns.

use std::{
    ffi::OsStr,
    io::{Read, Write},
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use crate::{
    config::{ChooserOptions, settings::DEFAULT_CHOOSER},
    error::PickError,
    selector::{AUGMENTED_KEY, CONFIRM_KEY},
    utils::find_on_path,
};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Raw result of a finished chooser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChooserReply {
    /// Whether the process exited with status zero
    pub success: bool,

    pub stdout: String,
}

/// Something that can present candidate records and report the user's pick.
pub trait Chooser {
    /// Run one session over the newline-joined `input` records.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::ChooserSpawn`] if the process cannot be started,
    /// [`PickError::ChooserCancelled`] if it times out, and
    /// [`PickError::Io`] for pipe failures.
    fn choose(&self, input: &str) -> Result<ChooserReply, PickError>;
}

/// [`Chooser`] driving `fzf` (or a compatible binary).
pub struct FzfChooser {
    bin: PathBuf,
    options: ChooserOptions,
}

impl FzfChooser {
    /// Resolve the configured binary on `search_path`.
    ///
    /// An override that cannot be found falls back to `fzf` on the same path,
    /// and failing that to the bare name `fzf`.
    #[must_use]
    pub fn new(options: ChooserOptions, search_path: Option<&OsStr>) -> Self {
        let bin = find_on_path(&options.bin, search_path)
            .or_else(|| find_on_path(DEFAULT_CHOOSER, search_path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHOOSER));

        Self { bin, options }
    }

    #[must_use]
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Command-line flags for one session.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        vec![
            format!("--height={}", self.options.height),
            "--reverse".to_string(),
            "--border".to_string(),
            "--prompt".to_string(),
            self.options.prompt.clone(),
            "--delimiter".to_string(),
            "\t".to_string(),
            "--with-nth".to_string(),
            "1".to_string(),
            "--preview".to_string(),
            format!(
                "ls -1 -- {{2q}} 2>/dev/null | head -{}",
                self.options.preview_limit
            ),
            "--expect".to_string(),
            format!("{AUGMENTED_KEY},{CONFIRM_KEY}"),
        ]
    }

    fn spawn(&self) -> Result<Child, PickError> {
        Command::new(&self.bin)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| PickError::ChooserSpawn {
                bin: self.bin.display().to_string(),
                source,
            })
    }
}

impl Chooser for FzfChooser {
    fn choose(&self, input: &str) -> Result<ChooserReply, PickError> {
        let mut child = self.spawn()?;
        exchange(&mut child, input, self.options.timeout)
    }
}

/// Feed `input` to `child`, collect its stdout and wait for it to exit.
///
/// Input and output are pumped on helper threads so a chooser that stops
/// reading early, or writes a lot, cannot deadlock the exchange.
///
/// # Errors
///
/// Returns [`PickError::ChooserCancelled`] when `timeout` elapses first; the
/// child is killed in that case.
pub fn exchange(
    child: &mut Child,
    input: &str,
    timeout: Option<Duration>,
) -> Result<ChooserReply, PickError> {
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_owned();
        // A chooser may exit before reading everything; a broken pipe is fine.
        thread::spawn(move || {
            let _ = stdin.write_all(input.as_bytes());
        })
    });

    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        })
    });

    let status = match timeout {
        None => child.wait()?,
        Some(limit) => {
            let started = Instant::now();
            loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if started.elapsed() >= limit {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(PickError::ChooserCancelled);
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    };

    if let Some(writer) = writer {
        let _ = writer.join();
    }

    let stdout = match reader {
        Some(reader) => reader
            .join()
            .map_err(|_| std::io::Error::other("chooser output reader panicked"))??,
        None => Vec::new(),
    };

    Ok(ChooserReply {
        success: status.success(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
    })
}
