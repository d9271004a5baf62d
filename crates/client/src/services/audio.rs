//! Audio-wellness content operations.
//!
//! Whether the current user may actually stream a track is the backend's
//! call; the client only resolves paths into playable URLs.

use serde::Deserialize;
use tracing::instrument;

use velasona_core::{AudioContent, AudioContentId, Page, PageInfo};

use crate::error::ApiResult;
use crate::http::{QueryPairs, StoreClient};
use crate::media::resolve_stream_url;
use crate::services::check_pagination;

/// Wire shape of the audio listing.
#[derive(Deserialize)]
struct AudioListWire {
    items: Vec<AudioContent>,
    pagination: PageInfo,
}

impl StoreClient {
    /// The audio library. `GET /audio`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn audio_library(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult<Page<AudioContent>> {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", page);
        pairs.push_opt("limit", limit);
        let wire: AudioListWire = self
            .get(&format!("/audio{}", pairs.to_query_string()))
            .await
            .map_err(|e| e.with_fallback("Failed to load audio library"))?;
        check_pagination(&wire.pagination, "audio");
        Ok(Page::new(wire.items, wire.pagination))
    }

    /// Fetch one audio item. `GET /audio/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the backend answers with an
    /// entitlement error when a subscription is required but absent.
    #[instrument(skip(self), fields(audio_id = %id))]
    pub async fn audio_content(&self, id: &AudioContentId) -> ApiResult<AudioContent> {
        self.get(&format!("/audio/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to load audio content"))
    }

    /// The public streaming URL for an audio item.
    ///
    /// Pure client-side rewrite: the backend-internal `/uploads/audio/`
    /// prefix is stripped and the name joined onto the media origin.
    #[must_use]
    pub fn stream_url(&self, content: &AudioContent) -> String {
        resolve_stream_url(&content.file_path, self.media_url())
    }
}
