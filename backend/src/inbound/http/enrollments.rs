//! Enrollment HTTP handlers.
//!
//! ```text
//! POST /enrollments
//! GET  /enrollments/check/{courseId}
//! GET  /enrollments/my-courses
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{EnrollRequest, EnrolledCourse};
use crate::domain::{Course, Enrollment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_course_id};

/// Request payload for enrolling in a course.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EnrollRequestBody {
    #[serde(rename = "courseId")]
    #[schema(format = "uuid")]
    pub course_id: String,
}

/// Enrollment record as serialised in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    #[schema(format = "uuid")]
    pub course_id: String,
    #[schema(example = "free")]
    pub payment_status: String,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    #[schema(format = "date-time")]
    pub enrolled_at: String,
}

impl From<Enrollment> for EnrollmentBody {
    fn from(value: Enrollment) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id.to_string(),
            course_id: value.course_id.to_string(),
            payment_status: value.payment_status.as_str().to_owned(),
            payment_id: value.payment_id,
            order_id: value.order_id,
            enrolled_at: value.enrolled_at.to_rfc3339(),
        }
    }
}

/// Course summary echoed alongside enrollments and orders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub price: f64,
}

impl From<Course> for CourseSummaryBody {
    fn from(value: Course) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            price: value.price,
        }
    }
}

/// Response payload for a created enrollment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollResponseBody {
    pub success: bool,
    pub message: String,
    pub enrollment: EnrollmentBody,
}

/// Response payload for the membership check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCheckResponseBody {
    pub is_enrolled: bool,
}

/// One entry of the my-courses listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrolledCourseBody {
    #[serde(flatten)]
    pub enrollment: EnrollmentBody,
    /// Course summary; absent when the course was removed from the catalogue.
    pub course: Option<CourseSummaryBody>,
}

impl From<EnrolledCourse> for EnrolledCourseBody {
    fn from(value: EnrolledCourse) -> Self {
        Self {
            enrollment: value.enrollment.into(),
            course: value.course.map(CourseSummaryBody::from),
        }
    }
}

/// Response payload for the my-courses listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MyCoursesResponseBody {
    pub enrollments: Vec<EnrolledCourseBody>,
}

/// Enroll the authenticated user in a free course.
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollRequestBody,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollResponseBody),
        (status = 400, description = "Invalid request or paid course", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema),
        (status = 409, description = "Already enrolled", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "enroll",
    security(("SessionCookie" = []))
)]
#[post("/enrollments")]
pub async fn enroll(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<EnrollRequestBody>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let course_id = parse_course_id(payload.into_inner().course_id, FieldName::new("courseId"))?;

    let enrollment = state
        .enrollments
        .enroll(EnrollRequest { user_id, course_id })
        .await?;

    Ok(HttpResponse::Created().json(EnrollResponseBody {
        success: true,
        message: "enrolled successfully".to_owned(),
        enrollment: enrollment.into(),
    }))
}

/// Report whether the authenticated user is enrolled in a course.
#[utoipa::path(
    get,
    path = "/enrollments/check/{courseId}",
    params(("courseId" = String, Path, format = "uuid")),
    responses(
        (status = 200, description = "Membership state", body = EnrollmentCheckResponseBody),
        (status = 400, description = "Invalid course id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "checkEnrollment",
    security(("SessionCookie" = []))
)]
#[get("/enrollments/check/{course_id}")]
pub async fn check_enrollment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<EnrollmentCheckResponseBody>> {
    let user_id = session.require_user_id()?;
    let course_id = parse_course_id(path.into_inner(), FieldName::new("courseId"))?;

    let is_enrolled = state
        .enrollments_query
        .is_enrolled(&user_id, &course_id)
        .await?;

    Ok(web::Json(EnrollmentCheckResponseBody { is_enrolled }))
}

/// List the authenticated user's enrollments, newest first.
#[utoipa::path(
    get,
    path = "/enrollments/my-courses",
    responses(
        (status = 200, description = "Enrollments with course summaries", body = MyCoursesResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "myCourses",
    security(("SessionCookie" = []))
)]
#[get("/enrollments/my-courses")]
pub async fn my_courses(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<MyCoursesResponseBody>> {
    let user_id = session.require_user_id()?;

    let enrollments = state.enrollments_query.list_courses(&user_id).await?;

    Ok(web::Json(MyCoursesResponseBody {
        enrollments: enrollments.into_iter().map(EnrolledCourseBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
