//! Request operations behind the HTTP routes.
//!
//! `RequestHandler` owns everything a request needs: the greeting service, the
//! pod identity resolved at startup and the diagnostic log. All three are
//! passed in at construction and never change afterwards, so a single handler
//! is shared across concurrent requests without locking.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticLog;
use crate::greeting::GreetingService;
use crate::pod::PodIdentity;

/// Status reported by the liveness probe.
pub const HEALTH_STATUS_OK: &str = "ok";

/// Body of `GET /` and `GET /{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub pod: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub pod: String,
}

/// Personal greeting for `name`, interpolated verbatim.
pub fn personal_greeting(name: &str) -> String {
    format!("Hello, {}! Welcome back!", name)
}

pub struct RequestHandler {
    greeting: GreetingService,
    pod: PodIdentity,
    log: Arc<dyn DiagnosticLog>,
}

impl RequestHandler {
    pub fn new(greeting: GreetingService, pod: PodIdentity, log: Arc<dyn DiagnosticLog>) -> Self {
        Self { greeting, pod, log }
    }

    pub fn pod(&self) -> &PodIdentity {
        &self.pod
    }

    pub fn handle_root(&self) -> GreetingResponse {
        self.log
            .write_line(&format!("Root greeting served by pod {}", self.pod));
        GreetingResponse {
            message: self.greeting.get_hello().to_string(),
            pod: self.pod.to_string(),
        }
    }

    /// Liveness probe. Touches nothing but in-memory state.
    pub fn handle_health(&self) -> HealthResponse {
        HealthResponse {
            status: HEALTH_STATUS_OK.to_string(),
            pod: self.pod.to_string(),
        }
    }

    pub fn handle_greeting(&self, name: &str) -> GreetingResponse {
        self.log.write_line(&format!(
            "Greeting requested for: {} (pod {})",
            name, self.pod
        ));
        GreetingResponse {
            message: personal_greeting(name),
            pod: self.pod.to_string(),
        }
    }
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHandler")
            .field("greeting", &self.greeting)
            .field("pod", &self.pod)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingLog;
    use std::ffi::OsString;

    fn handler_for(pod: &str) -> (RequestHandler, Arc<RecordingLog>) {
        let pod = PodIdentity::resolve_with(Some(pod.to_string()), OsString::new).unwrap();
        let log = Arc::new(RecordingLog::new());
        let handler = RequestHandler::new(GreetingService::new(), pod, log.clone());
        (handler, log)
    }

    #[test]
    fn root_returns_hello_world_with_pod() {
        let (handler, _) = handler_for("pod-42");
        assert_eq!(
            handler.handle_root(),
            GreetingResponse {
                message: "Hello World!".to_string(),
                pod: "pod-42".to_string(),
            }
        );
    }

    #[test]
    fn root_logs_pod_name() {
        let (handler, log) = handler_for("pod-42");
        handler.handle_root();
        let lines = log.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("pod-42"));
    }

    #[test]
    fn health_is_ok_and_silent() {
        let (handler, log) = handler_for("pod-42");
        let health = handler.handle_health();
        assert_eq!(health.status, "ok");
        assert_eq!(health.pod, "pod-42");
        assert!(log.lines().is_empty());
    }

    #[test]
    fn greeting_interpolates_name_verbatim() {
        let (handler, _) = handler_for("pod-42");
        for name in ["John", "", "  ", "Jürgen", "名前", "Hello", "Hello, Hello!", "<b>x</b>"] {
            let response = handler.handle_greeting(name);
            assert_eq!(
                response.message,
                format!("Hello, {}! Welcome back!", name)
            );
            assert_eq!(response.pod, "pod-42");
        }
    }

    #[test]
    fn greeting_logs_name_and_pod() {
        let (handler, log) = handler_for("pod-7");
        handler.handle_greeting("John");
        let lines = log.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("John"));
        assert!(lines[0].contains("pod-7"));
    }

    #[test]
    fn pod_is_identical_across_operations() {
        let (handler, _) = handler_for("pod-42");
        let root = handler.handle_root().pod;
        let health = handler.handle_health().pod;
        let greeting = handler.handle_greeting("John").pod;
        assert_eq!(root, health);
        assert_eq!(health, greeting);
        assert_eq!(greeting, handler.pod().as_str());
    }

    #[test]
    fn responses_serialize_with_expected_fields() {
        let (handler, _) = handler_for("pod-42");
        let root = serde_json::to_value(handler.handle_root()).unwrap();
        assert_eq!(
            root,
            serde_json::json!({"message": "Hello World!", "pod": "pod-42"})
        );
        let health = serde_json::to_value(handler.handle_health()).unwrap();
        assert_eq!(health, serde_json::json!({"status": "ok", "pod": "pod-42"}));
    }
}
