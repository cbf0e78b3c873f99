//! The five RPC methods of the course service.

use course_core::messages::{
    CreateCourseRequest, CreateCourseResponse, DeleteCourseRequest, GetAllCoursesResponse,
    GetCourseRequest, GetCourseResponse, SuccessResponse, UpdateCourseRequest,
};
use course_db::service::{CourseService, ServiceError};
use tracing::warn;

use crate::mapping;
use crate::status::Status;

/// Serves RPC requests on top of a [`CourseService`].
pub struct CourseHandler {
    service: CourseService,
}

impl CourseHandler {
    #[must_use]
    pub const fn new(service: CourseService) -> Self {
        Self { service }
    }

    /// Insert the course with every nested theme and lesson.
    ///
    /// # Errors
    ///
    /// Returns the internal status on any failure. Rows written before the
    /// failure may remain unless the service runs in atomic mode.
    pub async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CreateCourseResponse, Status> {
        let tree = mapping::create_request_to_tree(request);
        let id = self
            .service
            .create_course_tree(tree)
            .await
            .map_err(|e| collapse("CreateCourse", &e))?;
        Ok(CreateCourseResponse { id, success: true })
    }

    /// Update the course and insert-or-update each child by id presence.
    ///
    /// # Errors
    ///
    /// Returns the internal status on any failure.
    pub async fn update_course(
        &self,
        request: UpdateCourseRequest,
    ) -> Result<SuccessResponse, Status> {
        let update = mapping::update_request_to_tree(request);
        self.service
            .update_course_tree(update)
            .await
            .map_err(|e| collapse("UpdateCourse", &e))?;
        Ok(SuccessResponse::ok())
    }

    /// # Errors
    ///
    /// Returns the internal status if the listing fails.
    pub async fn get_all_courses(&self) -> Result<GetAllCoursesResponse, Status> {
        let courses = self
            .service
            .list_courses()
            .await
            .map_err(|e| collapse("GetAllCourses", &e))?;
        Ok(mapping::courses_to_response(courses))
    }

    /// # Errors
    ///
    /// Returns the internal status on any failure, including a missing course.
    pub async fn get_course(&self, request: GetCourseRequest) -> Result<GetCourseResponse, Status> {
        let tree = self
            .service
            .fetch_course_tree(request.id)
            .await
            .map_err(|e| collapse("GetCourse", &e))?;
        Ok(mapping::tree_to_response(tree))
    }

    /// # Errors
    ///
    /// Returns the internal status if the delete fails.
    pub async fn delete_course(
        &self,
        request: DeleteCourseRequest,
    ) -> Result<SuccessResponse, Status> {
        self.service
            .delete_course(request.id)
            .await
            .map_err(|e| collapse("DeleteCourse", &e))?;
        Ok(SuccessResponse::ok())
    }
}

/// Record the real failure, then hide it behind the opaque status.
fn collapse(method: &'static str, err: &ServiceError) -> Status {
    warn!(method, op = err.op, kind = %err.kind(), error = %err, "request failed");
    Status::internal()
}
