use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use reqwest::StatusCode;

use crate::api::RecordApi;
use crate::error::{Result, ViewerError};
use crate::models::RecordDetail;

pub(crate) fn record(id: &str, caption: &str, tags: &[&str]) -> RecordDetail {
    RecordDetail {
        id: id.to_string(),
        caption: caption.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        guild: "42".to_string(),
        channel: "100".to_string(),
        message: "200".to_string(),
        image_id: format!("img-{}", id),
        time: None,
    }
}

/// Ordered log shared between a test document and a [`ScriptedApi`].
pub(crate) type EventLog = Rc<RefCell<Vec<String>>>;

enum Reply {
    Ready(RecordDetail),
    Fail,
    /// Resolved by the test; `None` or a dropped sender fails the fetch
    Pending(oneshot::Receiver<Option<RecordDetail>>),
}

/// In-process [`RecordApi`] whose answers are set up per path.
pub(crate) struct ScriptedApi {
    ids: Option<Vec<String>>,
    replies: RefCell<HashMap<String, Reply>>,
    requests: RefCell<Vec<String>>,
    events: Option<EventLog>,
}

impl ScriptedApi {
    pub(crate) fn new(ids: &[&str]) -> Self {
        Self {
            ids: Some(ids.iter().map(|id| id.to_string()).collect()),
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
            events: None,
        }
    }

    pub(crate) fn failing_list() -> Self {
        Self {
            ids: None,
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
            events: None,
        }
    }

    pub(crate) fn with_record(self, path: &str, record: RecordDetail) -> Self {
        self.replies
            .borrow_mut()
            .insert(path.to_string(), Reply::Ready(record));
        self
    }

    /// Also log `GET {path}` into `events` when a fetch starts.
    pub(crate) fn with_event_log(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }

    pub(crate) fn with_failure(self, path: &str) -> Self {
        self.replies.borrow_mut().insert(path.to_string(), Reply::Fail);
        self
    }

    pub(crate) fn pending(&self, path: &str) -> oneshot::Sender<Option<RecordDetail>> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .borrow_mut()
            .insert(path.to_string(), Reply::Pending(rx));
        tx
    }

    /// Every path requested so far, in request order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn record_request(&self, path: &str) {
        self.requests.borrow_mut().push(path.to_string());
        if let Some(events) = &self.events {
            events.borrow_mut().push(format!("GET {}", path));
        }
    }

    fn not_found(path: &str) -> ViewerError {
        ViewerError::Status {
            path: path.to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl RecordApi for ScriptedApi {
    async fn fetch_ids(&self, path: &str) -> Result<Vec<String>> {
        self.record_request(path);
        self.ids.clone().ok_or_else(|| Self::not_found(path))
    }

    async fn fetch_record(&self, path: &str) -> Result<RecordDetail> {
        self.record_request(path);
        let reply = self.replies.borrow_mut().remove(path);
        match reply {
            Some(Reply::Ready(record)) => Ok(record),
            Some(Reply::Pending(rx)) => match rx.await {
                Ok(Some(record)) => Ok(record),
                _ => Err(Self::not_found(path)),
            },
            Some(Reply::Fail) | None => Err(Self::not_found(path)),
        }
    }
}
