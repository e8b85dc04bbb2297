use async_trait::async_trait;

use super::EncyclopediaProvider;
use crate::message::MusicInfoResult;

#[async_trait]
impl EncyclopediaProvider for wikipedia::Client {
    async fn summary(&self, title: &wikipedia::ArticleTitle) -> MusicInfoResult<wikipedia::Summary> {
        Ok(wikipedia::Client::summary(self, title).await?)
    }

    async fn summary_for_url(&self, url: &str) -> MusicInfoResult<wikipedia::Summary> {
        Ok(wikipedia::Client::summary_for_url(self, url).await?)
    }
}
