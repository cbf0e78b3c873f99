use std::path::Path;

use anyhow::Context;
use schemars::schema_for;
use serde::de::DeserializeOwned;

use course_core::messages::{
    CreateCourseRequest, CreateCourseResponse, DeleteCourseRequest, GetAllCoursesResponse,
    GetCourseRequest, GetCourseResponse, SuccessResponse, UpdateCourseRequest,
};
use course_rpc::CourseHandler;

use crate::cli::{Commands, MessageKind, OutputFormat};
use crate::output::output;

/// Run one RPC method through the handler and print its response.
///
/// A failed method surfaces as an `anyhow::Error` wrapping `course_rpc::Status`.
pub async fn dispatch(
    command: Commands,
    handler: &CourseHandler,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::Create { file } => {
            let request: CreateCourseRequest = read_request(file.as_deref())?;
            output(&handler.create_course(request).await?, format)
        }
        Commands::Update { file } => {
            let request: UpdateCourseRequest = read_request(file.as_deref())?;
            output(&handler.update_course(request).await?, format)
        }
        Commands::Get { id } => output(&handler.get_course(GetCourseRequest { id }).await?, format),
        Commands::List => output(&handler.get_all_courses().await?, format),
        Commands::Delete { id } => output(
            &handler.delete_course(DeleteCourseRequest { id }).await?,
            format,
        ),
        Commands::Schema { message } => print_schema(message, format),
    }
}

/// Print the JSON schema of one wire message.
pub fn print_schema(message: MessageKind, format: OutputFormat) -> anyhow::Result<()> {
    let schema = match message {
        MessageKind::CreateCourseRequest => schema_for!(CreateCourseRequest),
        MessageKind::CreateCourseResponse => schema_for!(CreateCourseResponse),
        MessageKind::UpdateCourseRequest => schema_for!(UpdateCourseRequest),
        MessageKind::SuccessResponse => schema_for!(SuccessResponse),
        MessageKind::GetCourseRequest => schema_for!(GetCourseRequest),
        MessageKind::GetCourseResponse => schema_for!(GetCourseResponse),
        MessageKind::GetAllCoursesResponse => schema_for!(GetAllCoursesResponse),
        MessageKind::DeleteCourseRequest => schema_for!(DeleteCourseRequest),
    };
    output(&schema, format)
}

/// Read a JSON request from `file`, or from stdin when no file is given.
pub fn read_request<T: DeserializeOwned>(file: Option<&Path>) -> anyhow::Result<T> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())
            .context("failed to read request from stdin")?,
    };
    serde_json::from_str(&text).context("request is not valid JSON for this method")
}
