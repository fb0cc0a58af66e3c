use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How the test server answers each connection.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Status(u16),
    /// Closes the 1st, 3rd, 5th... connection without a response.
    DropAlternate,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicUsize>,
}

impl ServerHandle {
    /// Connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server for tests.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(reply: Reply) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hit = server_hits.fetch_add(1, Ordering::SeqCst);
                    thread::spawn(move || handle_client(stream, reply, hit));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            hits,
        },
    ))
}

fn handle_client(mut stream: TcpStream, reply: Reply, hit: usize) {
    if stream.set_nonblocking(false).is_err() || !read_request(&mut stream) {
        return;
    }
    let status = match reply {
        Reply::Status(status) => status,
        Reply::DropAlternate if hit % 2 == 0 => {
            drop(stream.shutdown(Shutdown::Both));
            return;
        }
        Reply::DropAlternate => 200,
    };
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> bool {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];
    loop {
        let read = match stream.read(&mut buffer) {
            Ok(0) | Err(_) => return false,
            Ok(read) => read,
        };
        let Some(chunk) = buffer.get(..read) else {
            return false;
        };
        data.extend_from_slice(chunk);
        let text = String::from_utf8_lossy(&data);
        let Some(head_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if data.len() >= head_end.saturating_add(4).saturating_add(body_len) {
            return true;
        }
    }
}

/// Run the `loadr` binary in `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_loadr<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = loadr_bin()?;
    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env("LOADR_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("LOADR_RATE")
        .env_remove("LOADR_MAX")
        .env_remove("LOADR_URL")
        .env_remove("LOADR_TOKEN")
        .output()
        .map_err(|err| format!("run loadr failed: {}", err))
}

fn loadr_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_loadr").map_or_else(
        || Err("CARGO_BIN_EXE_loadr missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
