//! Job applications. This is the only multipart call, so it talks to
//! `reqwest` directly instead of going through [`ApiClient::execute`], but
//! classifies its outcome with the same rules.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::classify::{self, BodyShape};
use super::client::{read_response, report_failure, ApiClient};
use super::{ApiError, ApiResponse};

/// A resume attached to a job application.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::malformed_request(format!(
                "Could not read resume {}: {e}",
                path.display()
            ))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CareerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeFile>,
}

impl CareerApplication {
    fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("email", self.email)
            .text("phone", self.phone)
            .text("position", self.position);

        if let Some(cover_letter) = self.cover_letter.filter(|c| !c.is_empty()) {
            form = form.text("coverLetter", cover_letter);
        }

        if let Some(resume) = self.resume {
            let part = Part::bytes(resume.bytes)
                .file_name(resume.file_name)
                .mime_str(&resume.mime_type)
                .map_err(|e| ApiError::malformed_request(format!("Invalid resume type: {e}")))?;
            form = form.part("resume", part);
        }

        Ok(form)
    }
}

pub struct CareersApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl CareersApi<'_> {
    pub async fn create_public(
        &self,
        application: CareerApplication,
    ) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().careers_public();
        let result = self
            .client
            .within_budget(&endpoint, self.submit(&endpoint, application))
            .await;
        if let Err(error) = &result {
            report_failure(&endpoint, error);
        }
        result
    }

    async fn submit(
        &self,
        endpoint: &str,
        application: CareerApplication,
    ) -> Result<ApiResponse, ApiError> {
        // The multipart boundary header is set by reqwest.
        let form = application.into_form()?;
        let response = self
            .client
            .http()
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify::classify_transport(&e, endpoint))?;
        read_response(response, BodyShape::Upload, endpoint).await
    }
}
