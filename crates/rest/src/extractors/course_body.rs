//! Course body extractor.
//!
//! Reads course fields from `application/json`,
//! `application/x-www-form-urlencoded` or `multipart/form-data` request
//! bodies. A request without a `Content-Type` header is read as JSON.

use axum::{
    body::Bytes,
    extract::{
        FromRequest, Multipart, Request,
        multipart::{MultipartError, MultipartRejection},
        rejection::BytesRejection,
    },
    http::header,
    response::{IntoResponse, Response},
};
use campus_persistence::types::{CourseChanges, NewCourse};
use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Course fields read from a request body.
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFields {
    /// The submitted name, if the body had one.
    pub name: Option<String>,
}

impl CourseFields {
    /// Parses a JSON body. An empty body yields no fields.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CourseBodyRejection> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| CourseBodyRejection::InvalidJson(e.to_string()))?;

        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(CourseBodyRejection::InvalidField {
                    field: "non_field_errors".to_string(),
                    message: format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        json_type_name(&other)
                    ),
                });
            }
        };

        let name = match object.get("name") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Null) => {
                return Err(CourseBodyRejection::InvalidField {
                    field: "name".to_string(),
                    message: "This field may not be null.".to_string(),
                });
            }
            Some(_) => {
                return Err(CourseBodyRejection::InvalidField {
                    field: "name".to_string(),
                    message: "Not a valid string.".to_string(),
                });
            }
        };

        Ok(Self { name })
    }

    /// Parses a form-encoded body. The last `name` pair wins.
    pub fn from_form(bytes: &[u8]) -> Self {
        let name = url::form_urlencoded::parse(bytes)
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value.into_owned())
            .last();

        Self { name }
    }

    /// Reads the text parts of a multipart body. File parts are skipped and
    /// the last `name` part wins.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, CourseBodyRejection> {
        let mut name = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(CourseBodyRejection::MultipartField)?
        {
            if field.name() != Some("name") || field.file_name().is_some() {
                continue;
            }
            name = Some(
                field
                    .text()
                    .await
                    .map_err(CourseBodyRejection::MultipartField)?,
            );
        }

        Ok(Self { name })
    }

    /// Returns the name, failing when the body did not include one.
    pub fn require_name(self) -> RestResult<String> {
        self.name.ok_or_else(|| RestError::field_required("name"))
    }

    /// Converts the fields into a new course.
    pub fn into_new_course(self) -> RestResult<NewCourse> {
        Ok(NewCourse::new(self.require_name()?))
    }

    /// Converts the fields into a partial change set.
    pub fn into_changes(self) -> CourseChanges {
        CourseChanges { name: self.name }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
    Multipart,
}

fn body_format(content_type: Option<&str>) -> Result<BodyFormat, CourseBodyRejection> {
    let Some(content_type) = content_type else {
        return Ok(BodyFormat::Json);
    };

    let unsupported = || CourseBodyRejection::UnsupportedMediaType(content_type.to_string());
    let parsed: mime::Mime = content_type.parse().map_err(|_| unsupported())?;

    if parsed.type_() == mime::APPLICATION
        && (parsed.subtype() == mime::JSON || parsed.suffix() == Some(mime::JSON))
    {
        Ok(BodyFormat::Json)
    } else if parsed.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
        Ok(BodyFormat::Form)
    } else if parsed.essence_str() == mime::MULTIPART_FORM_DATA.essence_str() {
        Ok(BodyFormat::Multipart)
    } else {
        Err(unsupported())
    }
}

/// Axum extractor for course request bodies.
///
/// # Example
///
/// ```rust,ignore
/// use campus_rest::extractors::CourseBody;
///
/// async fn create_handler(CourseBody(fields): CourseBody) {
///     println!("Name: {:?}", fields.name);
/// }
/// ```
#[derive(Debug)]
pub struct CourseBody(pub CourseFields);

impl CourseBody {
    /// Consumes the extractor and returns the parsed fields.
    pub fn into_inner(self) -> CourseFields {
        self.0
    }
}

/// Error type for course body extraction failures.
#[derive(Debug)]
pub enum CourseBodyRejection {
    /// Reading the body failed (including the body size limit).
    Body(BytesRejection),
    /// The multipart body could not be opened.
    Multipart(MultipartRejection),
    /// A multipart part could not be read.
    MultipartField(MultipartError),
    /// JSON parsing failed.
    InvalidJson(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
    /// A field had the wrong shape.
    InvalidField {
        /// The offending field.
        field: String,
        /// Error message.
        message: String,
    },
}

impl IntoResponse for CourseBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            CourseBodyRejection::Body(rejection) => return rejection.into_response(),
            CourseBodyRejection::Multipart(rejection) => return rejection.into_response(),
            CourseBodyRejection::MultipartField(err) => return err.into_response(),
            CourseBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("JSON parse error - {}", msg),
            },
            CourseBodyRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
            CourseBodyRejection::InvalidField { field, message } => {
                RestError::Validation { field, message }
            }
        };
        error.into_response()
    }
}

async fn read_bytes<S>(req: Request, state: &S) -> Result<Bytes, CourseBodyRejection>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state)
        .await
        .map_err(CourseBodyRejection::Body)
}

impl<S> FromRequest<S> for CourseBody
where
    S: Send + Sync,
{
    type Rejection = CourseBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = body_format(
            req.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        )?;

        let fields = match format {
            BodyFormat::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(CourseBodyRejection::Multipart)?;
                CourseFields::from_multipart(multipart).await?
            }
            BodyFormat::Json => CourseFields::from_json(&read_bytes(req, state).await?)?,
            BodyFormat::Form => CourseFields::from_form(&read_bytes(req, state).await?),
        };

        Ok(CourseBody(fields))
    }
}
