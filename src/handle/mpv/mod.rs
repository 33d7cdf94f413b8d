//! mpv adapter for the player handle seam.
//!
//! Spawns mpv with `--input-ipc-server` pointing at a private Unix socket,
//! renders the video in mpv's own window, and drives it over the JSON IPC
//! protocol. Observed state (time-pos, duration, pause, speed) arrives as
//! property-change events on a reader thread and is folded into an
//! [`ObservedState`] snapshot on the controller thread during `poll()`.
//!
//! Playback starts paused (`--pause`) and survives end-of-file
//! (`--keep-open`), so the transport keeps working at both edges of the
//! stream.

pub mod ipc;

use std::env;
use std::fs;
use std::io::{BufReader, ErrorKind, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, warn};

use crate::handle::{HandleError, PlayerHandle};
use ipc::{Event, Message, Request};

/// Observer ids registered with mpv, one per property.
const PROP_TIME_POS: u64 = 1;
const PROP_DURATION: u64 = 2;
const PROP_PAUSE: u64 = 3;
const PROP_SPEED: u64 = 4;

const OBSERVED_PROPERTIES: &[(u64, &str)] = &[
    (PROP_TIME_POS, "time-pos"),
    (PROP_DURATION, "duration"),
    (PROP_PAUSE, "pause"),
    (PROP_SPEED, "speed"),
];

/// How long to wait for mpv to create its control socket.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to let mpv exit on its own after `quit` before killing it.
const QUIT_GRACE: Duration = Duration::from_secs(2);

/// Last observed player state, folded from property-change events.
///
/// Defaults mirror the spawn flags: paused at 1.0x with nothing observed.
#[derive(Debug, Clone, PartialEq)]
struct ObservedState {
    position: Option<f64>,
    duration: Option<f64>,
    paused: bool,
    speed: f64,
    error: Option<String>,
}

impl Default for ObservedState {
    fn default() -> Self {
        Self {
            position: None,
            duration: None,
            paused: true,
            speed: 1.0,
            error: None,
        }
    }
}

impl ObservedState {
    /// Effective rate: 0 while paused, the speed factor otherwise.
    fn rate(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            self.speed
        }
    }

    fn apply(&mut self, message: Message) {
        match message {
            Message::Event(event) => self.apply_event(event),
            Message::Reply(reply) => {
                if !reply.is_success() {
                    warn!(
                        "Player rejected command (request {:?}): {}",
                        reply.request_id, reply.error
                    );
                }
            }
        }
    }

    fn apply_event(&mut self, event: Event) {
        match event.event.as_str() {
            "property-change" => self.apply_property(event),
            "end-file" => {
                // Only the error reason is a playback failure; eof/stop are
                // ordinary ends and keep-open holds the window anyway
                if event.reason.as_deref() == Some("error") {
                    let detail = event
                        .file_error
                        .unwrap_or_else(|| "playback failed".to_string());
                    warn!("Player reported playback error: {}", detail);
                    self.error = Some(detail);
                }
            }
            other => debug!("Ignoring player event '{}'", other),
        }
    }

    fn apply_property(&mut self, event: Event) {
        let data = event.data;
        match event.id {
            Some(PROP_TIME_POS) => {
                // time-pos is null while no track is loaded
                self.position = data.as_ref().and_then(Value::as_f64);
            }
            Some(PROP_DURATION) => {
                self.duration = data.as_ref().and_then(Value::as_f64);
            }
            Some(PROP_PAUSE) => {
                if let Some(paused) = data.as_ref().and_then(Value::as_bool) {
                    self.paused = paused;
                }
            }
            Some(PROP_SPEED) => {
                if let Some(speed) = data.as_ref().and_then(Value::as_f64) {
                    self.speed = speed;
                }
            }
            _ => {}
        }
    }
}

/// Handle to a spawned mpv process.
pub struct MpvHandle {
    child: Child,
    writer: UnixStream,
    events: mpsc::Receiver<Message>,
    reader_thread: Option<thread::JoinHandle<()>>,
    socket_path: PathBuf,
    state: ObservedState,
    next_request_id: u64,
    disconnected: bool,
    shut_down: bool,
}

impl MpvHandle {
    /// Spawn mpv for `url` and connect to its control socket.
    ///
    /// # Arguments
    /// * `binary` - mpv executable name or path
    /// * `extra_args` - additional mpv arguments from configuration
    /// * `url` - stream URL or file path to load
    /// * `socket_dir` - directory for the control socket; defaults to
    ///   `$XDG_RUNTIME_DIR`, then the system temp dir
    ///
    /// Blocks until the socket accepts (a few hundred milliseconds on a
    /// warm start) or [`CONNECT_TIMEOUT`] passes.
    pub fn spawn(
        binary: &str,
        extra_args: &[String],
        url: &str,
        socket_dir: Option<&Path>,
    ) -> Result<Self, HandleError> {
        let socket_path = socket_path_in(socket_dir);
        // Stale socket from a previous crash would block the bind
        let _ = fs::remove_file(&socket_path);

        let mut child = Command::new(binary)
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .arg("--pause")
            .arg("--keep-open=yes")
            .arg("--no-terminal")
            .arg("--force-window=yes")
            .args(extra_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| HandleError::Spawn {
                binary: binary.to_string(),
                source,
            })?;

        let writer = match connect_with_retry(&socket_path, &mut child) {
            Ok(stream) => stream,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = fs::remove_file(&socket_path);
                return Err(e);
            }
        };

        let reader = BufReader::new(writer.try_clone()?);
        let (tx, events) = mpsc::channel();
        let reader_thread = thread::Builder::new()
            .name("mpv-ipc-reader".to_string())
            .spawn(move || ipc::read_loop(reader, tx))?;

        let mut handle = Self {
            child,
            writer,
            events,
            reader_thread: Some(reader_thread),
            socket_path,
            state: ObservedState::default(),
            next_request_id: 0,
            disconnected: false,
            shut_down: false,
        };

        for (observer, property) in OBSERVED_PROPERTIES {
            let request_id = handle.next_id();
            handle.send(Request::observe_property(*observer, property, request_id))?;
        }

        debug!(
            "mpv attached: pid {} socket {}",
            handle.child.id(),
            handle.socket_path.display()
        );
        Ok(handle)
    }

    fn next_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    fn send(&mut self, request: Request) -> Result<(), HandleError> {
        let line = request.to_line()?;
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| match e.kind() {
                ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => HandleError::Disconnected,
                _ => HandleError::Io(e),
            })
    }
}

impl PlayerHandle for MpvHandle {
    fn play(&mut self) -> Result<(), HandleError> {
        let request_id = self.next_id();
        self.send(Request::set_property("pause", false, request_id))
    }

    fn pause(&mut self) -> Result<(), HandleError> {
        let request_id = self.next_id();
        self.send(Request::set_property("pause", true, request_id))
    }

    fn seek(&mut self, seconds: f64) -> Result<(), HandleError> {
        let request_id = self.next_id();
        self.send(Request::seek_absolute(seconds, request_id))
    }

    fn position(&self) -> Option<f64> {
        self.state.position
    }

    fn duration(&self) -> Option<f64> {
        self.state.duration
    }

    fn rate(&self) -> f64 {
        self.state.rate()
    }

    fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    fn poll(&mut self) -> Result<(), HandleError> {
        loop {
            match self.events.try_recv() {
                Ok(message) => self.state.apply(message),
                Err(mpsc::TryRecvError::Empty) => return Ok(()),
                Err(mpsc::TryRecvError::Disconnected) => {
                    if self.shut_down {
                        return Ok(());
                    }
                    self.disconnected = true;
                    return Err(HandleError::Disconnected);
                }
            }
        }
    }

    fn shutdown(&mut self) -> Result<(), HandleError> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;

        if !self.disconnected {
            // Best effort: the player may already be gone
            for (observer, _) in OBSERVED_PROPERTIES {
                let request_id = self.next_id();
                let _ = self.send(Request::unobserve_property(*observer, request_id));
            }
            let request_id = self.next_id();
            let _ = self.send(Request::quit(request_id));
        }

        let deadline = Instant::now() + QUIT_GRACE;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    debug!("mpv exited: {}", status);
                    break;
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!("mpv did not quit in time, killing it");
                        let _ = self.child.kill();
                        let _ = self.child.wait();
                        break;
                    }
                    thread::sleep(Duration::from_millis(25));
                }
                Err(e) => {
                    warn!("Failed to reap mpv: {}", e);
                    break;
                }
            }
        }

        if let Some(thread) = self.reader_thread.take() {
            let _ = thread.join();
        }
        let _ = fs::remove_file(&self.socket_path);
        Ok(())
    }
}

impl Drop for MpvHandle {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Pick the control socket location.
fn socket_path_in(dir: Option<&Path>) -> PathBuf {
    let dir = dir
        .map(Path::to_path_buf)
        .or_else(|| env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from))
        .unwrap_or_else(env::temp_dir);
    dir.join(format!("vdeck-mpv-{}.sock", std::process::id()))
}

/// Poll-connect until mpv creates the socket, it exits, or the timeout hits.
fn connect_with_retry(path: &Path, child: &mut Child) -> Result<UnixStream, HandleError> {
    let deadline = Instant::now() + CONNECT_TIMEOUT;
    loop {
        match UnixStream::connect(path) {
            Ok(stream) => return Ok(stream),
            Err(_) if Instant::now() < deadline => {
                if let Ok(Some(status)) = child.try_wait() {
                    warn!("mpv exited during startup: {}", status);
                    return Err(HandleError::Disconnected);
                }
                thread::sleep(Duration::from_millis(50));
            }
            Err(_) => {
                return Err(HandleError::ConnectTimeout {
                    path: path.to_path_buf(),
                })
            }
        }
    }
}
