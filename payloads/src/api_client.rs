use crate::{
    CategoryId, FileId, UserId,
    requests::{self, CategoryRequest, IntroduceRequest, LocationUpdate},
    responses,
};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ReqwestResult {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.get(self.format_url(path)))
            .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)).json(body))
            .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)))
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.put(self.format_url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.delete(self.format_url(path)))
            .await
    }

    async fn multipart_post(&self, path: &str, form: Form) -> ReqwestResult {
        self.send(
            self.inner_client
                .post(self.format_url(path))
                .multipart(form),
        )
        .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("v1/users/login", details).await?;
        ok_empty(response).await
    }

    /// Create an account. The caller logs in separately afterwards.
    pub async fn signup(
        &self,
        details: &requests::Signup,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.post("v1/users/signup", details).await?;
        ok_body(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("v1/users/logout").await?;
        ok_empty(response).await
    }

    /// Get the profile of the signed in user.
    pub async fn current_user(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.get("v1/users/me").await?;
        ok_body(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.get("v1/users/me").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get every category owned by a user.
    pub async fn list_categories(
        &self,
        user_id: UserId,
    ) -> Result<Vec<responses::Category>, ClientError> {
        let response = self.get(&format!("category?userId={user_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_category(
        &self,
        user_id: UserId,
        details: &CategoryRequest,
    ) -> Result<responses::Category, ClientError> {
        let response = self
            .post(&format!("category?userId={user_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn get_category(
        &self,
        public_id: &str,
    ) -> Result<responses::Category, ClientError> {
        let response = self.get(&format!("category/{public_id}")).await?;
        ok_body(response).await
    }

    pub async fn update_category(
        &self,
        public_id: &str,
        details: &CategoryRequest,
    ) -> Result<responses::Category, ClientError> {
        let response =
            self.put(&format!("category/{public_id}"), details).await?;
        ok_body(response).await
    }

    /// Look a category up in its owner's list. `None` when the owner has
    /// no category with that id.
    pub async fn find_category(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> Result<Option<responses::Category>, ClientError> {
        let categories = self.list_categories(user_id).await?;
        Ok(categories.into_iter().find(|c| c.id == category_id))
    }

    /// Delete a category. Returns the backend's confirmation message.
    pub async fn delete_category(
        &self,
        category_id: CategoryId,
    ) -> Result<String, ClientError> {
        let response = self
            .delete(&format!("category?categoryId={category_id}"))
            .await?;
        ok_text(response).await
    }

    /// Get a category's intro post; both fields are `None` when it has none.
    pub async fn get_introduce(
        &self,
        category_id: CategoryId,
    ) -> Result<responses::Introduce, ClientError> {
        let response = self
            .get(&format!("posts/introduce?categoryId={category_id}"))
            .await?;
        ok_body(response).await
    }

    /// Write a category's first intro post. Returns the backend's message.
    pub async fn create_introduce(
        &self,
        category_id: CategoryId,
        details: &IntroduceRequest,
    ) -> Result<String, ClientError> {
        let response = self
            .post(&format!("posts/introduce?categoryId={category_id}"), details)
            .await?;
        ok_text(response).await
    }

    /// Replace a category's intro post. Returns the backend's message.
    pub async fn update_introduce(
        &self,
        category_id: CategoryId,
        details: &IntroduceRequest,
    ) -> Result<String, ClientError> {
        let response = self
            .put(&format!("posts/introduce?categoryId={category_id}"), details)
            .await?;
        ok_text(response).await
    }

    pub async fn list_files(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<responses::FileResource>, ClientError> {
        let response =
            self.get(&format!("files/category/{category_id}")).await?;
        ok_body(response).await
    }

    /// Upload a file into a category. Returns the URL of the stored file.
    pub async fn upload_file(
        &self,
        category_id: CategoryId,
        upload: requests::FileUpload,
    ) -> Result<String, ClientError> {
        let mut part = Part::bytes(upload.data)
            .file_name(requests::sanitize_file_name(&upload.file_name));
        if let Some(mime_type) = &upload.mime_type {
            part = part.mime_str(mime_type)?;
        }
        let form = Form::new()
            .part("file", part)
            .text("categoryId", category_id.to_string())
            .text("title", upload.title);

        let response = self.multipart_post("files/upload", form).await?;
        ok_text(response).await
    }

    pub async fn delete_file(&self, file_id: &FileId) -> Result<(), ClientError> {
        let response = self.delete(&format!("files/{file_id}")).await?;
        ok_empty(response).await
    }

    pub async fn get_user_location(
        &self,
        user_id: UserId,
    ) -> Result<responses::LocationResponse, ClientError> {
        let response =
            self.get(&format!("users/{user_id}/location")).await?;
        ok_body(response).await
    }

    pub async fn update_user_location(
        &self,
        user_id: UserId,
        details: &LocationUpdate,
    ) -> Result<responses::LocationResponse, ClientError> {
        let response = self
            .put(&format!("users/{user_id}/location"), details)
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("네트워크 오류가 발생했습니다. 연결을 확인해주세요.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Read a successful plain text body, or return an appropriate error.
pub async fn ok_text(response: reqwest::Response) -> Result<String, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.text().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
