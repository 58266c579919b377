use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub login: String,
    pub display_name: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub bio: String,
    pub repo_count: u32,
    pub follower_count: u32,
    pub following_count: u32,
}

impl From<GitHubUser> for Profile {
    fn from(user: GitHubUser) -> Self {
        Self {
            display_name: user.name.unwrap_or_else(|| user.login.clone()),
            login: user.login,
            avatar_url: user.avatar_url,
            profile_url: user.html_url,
            bio: user.bio.unwrap_or_default(),
            repo_count: user.public_repos,
            follower_count: user.followers,
            following_count: user.following,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub star_count: u32,
    pub fork_count: u32,
    pub primary_language: Option<String>,
}

impl From<&Repository> for RepositorySummary {
    fn from(repo: &Repository) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            description: repo.description.clone(),
            url: repo.html_url.clone(),
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            primary_language: repo.language.clone(),
        }
    }
}
