use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::SanityConfig;
use crate::error::{Error, Result};
use crate::models::Project;

const PROJECT_PROJECTION: &str = r#"{
  _id,
  name,
  "description": coalesce(description, ""),
  language,
  stars,
  forks,
  "category": coalesce(category, "web"),
  "featured": coalesce(featured, false),
  "type": coalesce(type, "web"),
  demoUrl,
  codeUrl,
  "color": coalesce(color, "primary"),
  order,
  "technologies": coalesce(technologies, []),
  "imageUrl": image.asset->url,
  "createdAt": coalesce(createdAt, _createdAt),
  "updatedAt": coalesce(updatedAt, _updatedAt)
}"#;

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: Option<Vec<T>>,
}

pub struct SanityClient {
    client: Client,
    query_url: String,
    document_type: String,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            query_url: config.query_url(),
            document_type: config.document_type.clone(),
        })
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.fetch(&projects_query(&self.document_type, false)).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>> {
        self.fetch(&projects_query(&self.document_type, true)).await
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>> {
        tracing::debug!("Running Sanity query: {}", query);

        let response = self
            .client
            .get(&self.query_url)
            .query(&[("query", query), ("returnQuery", "false")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Sanity(format!("Query failed ({}): {}", status, body)));
        }

        let body: QueryResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Sanity(format!("Failed to parse query response: {}", e)))?;

        Ok(body.result.unwrap_or_default())
    }
}

pub fn projects_query(document_type: &str, featured_only: bool) -> String {
    let document_type = document_type.replace(['"', '\\'], "");
    let (filter, ordering) = if featured_only {
        (
            format!(r#"_type == "{}" && featured == true"#, document_type),
            "order asc, stars desc",
        )
    } else {
        (
            format!(r#"_type == "{}""#, document_type),
            "order asc, featured desc, stars desc",
        )
    };

    format!("*[{}] | order({}) {}", filter, ordering, PROJECT_PROJECTION)
}
