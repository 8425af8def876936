//! [`MockFileIo`]: a [`FileIo`] double that records call arguments.
//!
//! Responses are configured per method, either as a fixed
//! [`MockResponse`] or as a closure over the recorded [`MockCall`].
//! Unconfigured methods fall back to neutral defaults:
//!
//! | Method | Default |
//! |--------|---------|
//! | `operating_system` | `Unknown` |
//! | `path_separator` | `"/"` |
//! | `to_host_path` | input unchanged |
//! | `exists`, `dir_exists` | `false` |
//! | `read`, `read_range`, `list_dir`, `info`, `checksum` | `NotFound` |
//! | writes, copies, deletes, `create_dir` | `Ok(())` |
//!
//! # Example
//!
//! ```rust
//! use fskit_io::FileIo;
//! use fskit_test_utils::{MockFileIo, MockMethod, MockResponse, MockValue};
//! use std::path::Path;
//!
//! let mock = MockFileIo::new();
//! mock.on(MockMethod::Read, MockResponse::Bytes(b"hello".to_vec()));
//!
//! assert_eq!(mock.read(Path::new("greeting.txt")).unwrap(), b"hello");
//! let call = &mock.calls_to(MockMethod::Read)[0];
//! assert_eq!(call.argument("path"), Some(&MockValue::path("greeting.txt")));
//! ```

use fskit_io::{
    ChecksumMethod, DirEntry, Error, FileInfo, FileIo, OperatingSystem, Result, path,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A [`FileIo`] method that can be configured and recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockMethod {
    OperatingSystem,
    ExecutionPath,
    PathSeparator,
    ToHostPath,
    JoinPath,
    Exists,
    Read,
    ReadRange,
    Write,
    WriteBuffered,
    Copy,
    Delete,
    Info,
    DirExists,
    CreateDir,
    ListDir,
    CopyDir,
    DeleteDir,
    Checksum,
}

/// A recorded argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockValue {
    Path(PathBuf),
    Text(String),
    Parts(Vec<String>),
    Bytes(Vec<u8>),
    Number(u64),
    Mode(u32),
    Method(ChecksumMethod),
}

impl MockValue {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockArgument {
    pub name: &'static str,
    pub value: MockValue,
}

/// One invocation of a mocked method with its named arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub method: MockMethod,
    pub arguments: Vec<MockArgument>,
}

impl MockCall {
    fn new(method: MockMethod) -> Self {
        Self {
            method,
            arguments: Vec::new(),
        }
    }

    fn with(mut self, name: &'static str, value: MockValue) -> Self {
        self.arguments.push(MockArgument { name, value });
        self
    }

    /// Look up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&MockValue> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// What a mocked method returns.
///
/// The error variants are converted to [`fskit_io::Error`] using the path
/// the method was called with. A response of the wrong shape for a method
/// is ignored and the method's default is returned instead.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Unit,
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
    Os(OperatingSystem),
    Info(FileInfo),
    Entries(Vec<DirEntry>),
    NotFound,
    Failure(std::io::ErrorKind),
    InvalidChecksumMethod(String),
}

impl MockResponse {
    fn to_error(&self, path: &Path) -> Option<Error> {
        match self {
            Self::NotFound => Some(Error::not_found(path)),
            Self::Failure(kind) => Some(Error::io(path, std::io::Error::from(*kind))),
            Self::InvalidChecksumMethod(method) => Some(Error::InvalidChecksumMethod {
                method: method.clone(),
            }),
            _ => None,
        }
    }
}

type Handler = Box<dyn Fn(&MockCall) -> MockResponse + Send + Sync>;

/// Test double for [`FileIo`].
#[derive(Default)]
pub struct MockFileIo {
    handlers: Mutex<HashMap<MockMethod, Handler>>,
    calls: Mutex<Vec<MockCall>>,
}

impl std::fmt::Debug for MockFileIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFileIo")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

impl MockFileIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `response` every time `method` is called.
    pub fn on(&self, method: MockMethod, response: MockResponse) -> &Self {
        self.on_call(method, move |_| response.clone())
    }

    /// Compute the response for `method` from the recorded call.
    pub fn on_call<F>(&self, method: MockMethod, handler: F) -> &Self
    where
        F: Fn(&MockCall) -> MockResponse + Send + Sync + 'static,
    {
        self.handlers
            .lock()
            .expect("MockFileIo: handler lock poisoned")
            .insert(method, Box::new(handler));
        self
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .expect("MockFileIo: call lock poisoned")
            .clone()
    }

    pub fn calls_to(&self, method: MockMethod) -> Vec<MockCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }

    pub fn call_count(&self, method: MockMethod) -> usize {
        self.calls_to(method).len()
    }

    fn respond(&self, call: MockCall) -> Option<MockResponse> {
        let response = self
            .handlers
            .lock()
            .expect("MockFileIo: handler lock poisoned")
            .get(&call.method)
            .map(|handler| handler(&call));
        self.calls
            .lock()
            .expect("MockFileIo: call lock poisoned")
            .push(call);
        response
    }

    fn resolve<T>(
        &self,
        call: MockCall,
        path: &Path,
        extract: impl FnOnce(MockResponse) -> Option<T>,
        default: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        let Some(response) = self.respond(call) else {
            return default();
        };
        if let Some(err) = response.to_error(path) {
            return Err(err);
        }
        extract(response).map_or_else(default, Ok)
    }

    fn resolve_unit(&self, call: MockCall, path: &Path) -> Result<()> {
        self.resolve(call, path, |_| Some(()), || Ok(()))
    }

    fn resolve_bool(&self, call: MockCall) -> bool {
        match self.respond(call) {
            Some(MockResponse::Bool(value)) => value,
            _ => false,
        }
    }
}

impl FileIo for MockFileIo {
    fn operating_system(&self) -> OperatingSystem {
        match self.respond(MockCall::new(MockMethod::OperatingSystem)) {
            Some(MockResponse::Os(os)) => os,
            _ => OperatingSystem::Unknown,
        }
    }

    fn execution_path(&self) -> String {
        match self.respond(MockCall::new(MockMethod::ExecutionPath)) {
            Some(MockResponse::Text(text)) => text,
            _ => String::new(),
        }
    }

    /// Configure with [`MockResponse::Os`] to pick a separator.
    fn path_separator(&self) -> &'static str {
        match self.respond(MockCall::new(MockMethod::PathSeparator)) {
            Some(MockResponse::Os(os)) => path::path_separator(os),
            _ => "/",
        }
    }

    fn to_host_path(&self, input: &str) -> String {
        let call =
            MockCall::new(MockMethod::ToHostPath).with("path", MockValue::Text(input.into()));
        match self.respond(call) {
            Some(MockResponse::Text(text)) => text,
            _ => input.to_string(),
        }
    }

    fn join_path(&self, parts: &[&str]) -> String {
        let call = MockCall::new(MockMethod::JoinPath).with(
            "parts",
            MockValue::Parts(parts.iter().map(|p| p.to_string()).collect()),
        );
        match self.respond(call) {
            Some(MockResponse::Text(text)) => text,
            _ => path::join_path(parts, OperatingSystem::Unknown),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve_bool(MockCall::new(MockMethod::Exists).with("path", MockValue::path(path)))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let call = MockCall::new(MockMethod::Read).with("path", MockValue::path(path));
        self.resolve(
            call,
            path,
            |response| match response {
                MockResponse::Bytes(bytes) => Some(bytes),
                _ => None,
            },
            || Err(Error::not_found(path)),
        )
    }

    fn read_range(&self, path: &Path, from: u64, to: u64) -> Result<Vec<u8>> {
        let call = MockCall::new(MockMethod::ReadRange)
            .with("path", MockValue::path(path))
            .with("from", MockValue::Number(from))
            .with("to", MockValue::Number(to));
        self.resolve(
            call,
            path,
            |response| match response {
                MockResponse::Bytes(bytes) => Some(bytes),
                _ => None,
            },
            || Err(Error::not_found(path)),
        )
    }

    fn write(&self, path: &Path, data: &[u8], mode: u32) -> Result<()> {
        let call = MockCall::new(MockMethod::Write)
            .with("path", MockValue::path(path))
            .with("data", MockValue::Bytes(data.to_vec()))
            .with("mode", MockValue::Mode(mode));
        self.resolve_unit(call, path)
    }

    fn write_buffered(
        &self,
        path: &Path,
        data: &[u8],
        chunk_size: usize,
        mode: u32,
    ) -> Result<()> {
        let call = MockCall::new(MockMethod::WriteBuffered)
            .with("path", MockValue::path(path))
            .with("data", MockValue::Bytes(data.to_vec()))
            .with("chunk_size", MockValue::Number(chunk_size as u64))
            .with("mode", MockValue::Mode(mode));
        self.resolve_unit(call, path)
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        let call = MockCall::new(MockMethod::Copy)
            .with("source", MockValue::path(source))
            .with("destination", MockValue::path(destination));
        self.resolve_unit(call, source)
    }

    fn delete(&self, path: &Path) -> Result<()> {
        let call = MockCall::new(MockMethod::Delete).with("path", MockValue::path(path));
        self.resolve_unit(call, path)
    }

    fn info(&self, path: &Path) -> Result<FileInfo> {
        let call = MockCall::new(MockMethod::Info).with("path", MockValue::path(path));
        self.resolve(
            call,
            path,
            |response| match response {
                MockResponse::Info(info) => Some(info),
                _ => None,
            },
            || Err(Error::not_found(path)),
        )
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.resolve_bool(MockCall::new(MockMethod::DirExists).with("path", MockValue::path(path)))
    }

    fn create_dir(&self, path: &Path, mode: u32) -> Result<()> {
        let call = MockCall::new(MockMethod::CreateDir)
            .with("path", MockValue::path(path))
            .with("mode", MockValue::Mode(mode));
        self.resolve_unit(call, path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let call = MockCall::new(MockMethod::ListDir).with("path", MockValue::path(path));
        self.resolve(
            call,
            path,
            |response| match response {
                MockResponse::Entries(entries) => Some(entries),
                _ => None,
            },
            || Err(Error::not_found(path)),
        )
    }

    fn copy_dir(&self, source: &Path, destination: &Path) -> Result<()> {
        let call = MockCall::new(MockMethod::CopyDir)
            .with("source", MockValue::path(source))
            .with("destination", MockValue::path(destination));
        self.resolve_unit(call, source)
    }

    fn delete_dir(&self, path: &Path) -> Result<()> {
        let call = MockCall::new(MockMethod::DeleteDir).with("path", MockValue::path(path));
        self.resolve_unit(call, path)
    }

    fn checksum(&self, path: &Path, method: ChecksumMethod) -> Result<String> {
        let call = MockCall::new(MockMethod::Checksum)
            .with("path", MockValue::path(path))
            .with("method", MockValue::Method(method));
        self.resolve(
            call,
            path,
            |response| match response {
                MockResponse::Text(digest) => Some(digest),
                _ => None,
            },
            || Err(Error::not_found(path)),
        )
    }
}
