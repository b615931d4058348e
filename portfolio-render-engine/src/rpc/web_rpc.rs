use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use constants::links::{FOOTER_LINKS, NAV_LINKS, SOCIAL_LINKS};
use serde::{Deserialize, Serialize};

use crate::engine::core::route::Route;
use crate::engine::systems::fps_tracking::smoothed_fps;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outgoing message queues, flushed once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        for route in Route::ALL {
            app.add_systems(OnEnter(route), announce_route);
        }

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(err) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", err);
        }
    }

    // Lives for the whole page, so ownership moves to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    route: Res<State<Route>>,
    mut next_route: ResMut<NextState<Route>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        rpc_interface.send_notification(
            "debug_message",
            serde_json::json!({
                "message": format!("Received RPC: {}", event.content)
            }),
        );

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let context = RpcContext {
                    route: *route.get(),
                    fps: smoothed_fps(&diagnostics).unwrap_or(0.0),
                };
                if let Some(response) = handle_rpc_request(&request, &context, &mut next_route) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Read-only engine state a request may report.
#[derive(Debug, Clone, Copy)]
pub struct RpcContext {
    pub route: Route,
    pub fps: f32,
}

/// Handle one request. Requests without an id get no response.
pub fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    next_route: &mut NextState<Route>,
) -> Option<RpcResponse> {
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "navigate" => handle_navigate(&request.params, context, next_route),
        "get_route" => Ok(serde_json::json!({ "path": context.route.path() })),
        "get_links" => Ok(serde_json::json!({
            "nav": NAV_LINKS,
            "footer": FOOTER_LINKS,
            "socials": SOCIAL_LINKS,
        })),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_navigate(
    params: &serde_json::Value,
    context: &RpcContext,
    next_route: &mut NextState<Route>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct NavigateParams {
        path: String,
    }

    let navigate_params = serde_json::from_value::<NavigateParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'path' parameter"))?;

    let route = Route::from_path(&navigate_params.path).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown route: {}", navigate_params.path))
    })?;

    if route != context.route {
        next_route.set(route);
        info!("Navigating {} -> {}", context.route.path(), route.path());
    }

    Ok(serde_json::json!({
        "success": true,
        "path": route.path()
    }))
}

fn announce_route(route: Res<State<Route>>, mut rpc_interface: ResMut<WebRpcInterface>) {
    rpc_interface.send_notification(
        "route_changed",
        serde_json::json!({ "path": route.get().path() }),
    );
}

fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: Some(serde_json::json!(7)),
        }
    }

    fn context() -> RpcContext {
        RpcContext {
            route: Route::Hero,
            fps: 60.0,
        }
    }

    #[test]
    fn navigate_queues_route_change() {
        let mut next = NextState::<Route>::default();
        let response = handle_rpc_request(
            &request("navigate", serde_json::json!({"path": "/about/"})),
            &context(),
            &mut next,
        )
        .unwrap();

        assert!(response.error.is_none());
        assert_eq!(response.id, Some(serde_json::json!(7)));
        assert_eq!(response.result.unwrap()["path"], "/about");
        assert!(matches!(next, NextState::Pending(Route::About)));
    }

    #[test]
    fn navigate_to_current_route_changes_nothing() {
        let mut next = NextState::<Route>::default();
        handle_rpc_request(
            &request("navigate", serde_json::json!({"path": "/"})),
            &context(),
            &mut next,
        );
        assert!(matches!(next, NextState::Unchanged));
    }

    #[test]
    fn unknown_path_is_invalid_params() {
        let mut next = NextState::<Route>::default();
        let response = handle_rpc_request(
            &request("navigate", serde_json::json!({"path": "/blog"})),
            &context(),
            &mut next,
        )
        .unwrap();

        assert_eq!(response.error.map(|e| e.code), Some(-32602));
        assert!(matches!(next, NextState::Unchanged));
    }

    #[test]
    fn unknown_method_is_not_found() {
        let mut next = NextState::<Route>::default();
        let response = handle_rpc_request(
            &request("reboot", serde_json::Value::Null),
            &context(),
            &mut next,
        )
        .unwrap();
        assert_eq!(response.error.map(|e| e.code), Some(-32601));
    }

    #[test]
    fn notifications_get_no_response() {
        let mut next = NextState::<Route>::default();
        let mut notification = request("get_route", serde_json::Value::Null);
        notification.id = None;
        assert!(handle_rpc_request(&notification, &context(), &mut next).is_none());
    }

    #[test]
    fn reports_links_and_route() {
        let mut next = NextState::<Route>::default();
        let links = handle_rpc_request(&request("get_links", serde_json::Value::Null), &context(), &mut next)
            .and_then(|response| response.result)
            .unwrap();
        assert_eq!(links["nav"].as_array().map(Vec::len), Some(NAV_LINKS.len()));
        assert_eq!(links["socials"][0]["name"], "GitHub");

        let route = handle_rpc_request(&request("get_route", serde_json::Value::Null), &context(), &mut next)
            .and_then(|response| response.result)
            .unwrap();
        assert_eq!(route["path"], "/");
    }

    #[test]
    fn params_default_when_missing() {
        let parsed: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_fps","id":1}"#).unwrap();
        assert!(parsed.params.is_null());
    }
}
