//! Scripted in-memory transport for unit tests.
//!
//! Every call pops the next scripted reply. Replies created with
//! [`FakeTransport::gate`] stay pending until the test sends them, which lets a
//! test decide the order in which concurrent requests complete.

use crate::shared::api_utils::{ApiTransport, Document};
use crate::shared::error::{ConsoleError, ConsoleResult};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Document(Document),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    replies: RefCell<VecDeque<oneshot::Receiver<ConsoleResult<Reply>>>>,
    calls: RefCell<Vec<Call>>,
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<Inner>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> oneshot::Sender<ConsoleResult<Reply>> {
        let (tx, rx) = oneshot::channel();
        self.inner.replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn reply(&self, value: Value) {
        let _ = self.gate().send(Ok(Reply::Json(value)));
    }

    pub fn reply_document(&self, document: Document) {
        let _ = self.gate().send(Ok(Reply::Document(document)));
    }

    pub fn fail(&self, error: ConsoleError) {
        let _ = self.gate().send(Err(error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.inner.calls.borrow().iter().map(|c| c.query.clone()).collect()
    }

    async fn next(
        &self,
        method: &'static str,
        path: &str,
        query: &str,
        body: Option<&Value>,
    ) -> ConsoleResult<Reply> {
        self.inner.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            query: query.to_string(),
            body: body.cloned(),
        });
        let rx = self.inner.replies.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ConsoleError::Transport("reply dropped".into()))),
            None => Err(ConsoleError::Transport(format!(
                "no scripted reply for {} {}",
                method, path
            ))),
        }
    }
}

fn json(reply: Reply) -> ConsoleResult<Value> {
    match reply {
        Reply::Json(v) => Ok(v),
        Reply::Document(_) => Err(ConsoleError::Transport("expected JSON".into())),
    }
}

#[async_trait(?Send)]
impl ApiTransport for FakeTransport {
    async fn get_json(&self, path: &str, query: &str) -> ConsoleResult<Value> {
        json(self.next("GET", path, query, None).await?)
    }

    async fn post_json(&self, path: &str, body: &Value) -> ConsoleResult<Value> {
        json(self.next("POST", path, "", Some(body)).await?)
    }

    async fn put_json(&self, path: &str, body: &Value) -> ConsoleResult<Value> {
        json(self.next("PUT", path, "", Some(body)).await?)
    }

    async fn delete(&self, path: &str) -> ConsoleResult<()> {
        self.next("DELETE", path, "", None).await.map(|_| ())
    }

    async fn get_document(&self, path: &str, query: &str) -> ConsoleResult<Document> {
        match self.next("GET", path, query, None).await? {
            Reply::Document(d) => Ok(d),
            Reply::Json(_) => Err(ConsoleError::Transport("expected a document".into())),
        }
    }
}
