//! Common test utilities for integration tests

use todo_mcp::TodoServerHandler;

/// Create a fresh handler with an empty task list
pub fn create_test_server() -> TodoServerHandler {
    TodoServerHandler::new()
}

/// Extract the task ID from an add_task() response message
/// Response format: "Task created with ID: <id>"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        return id_part
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();
    }
    String::new()
}

/// Stage text and commit it as a task, returning the new task's ID
pub async fn stage_and_add(server: &TodoServerHandler, text: &str) -> String {
    server.set_staged_input(text.to_string()).await.unwrap();
    let response = server.add_task().await.unwrap();
    extract_id_from_response(&response)
}
