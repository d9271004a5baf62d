//! Invoice operations, including PDF download.
//!
//! The PDF endpoint returns a binary stream, so the download bypasses the
//! JSON envelope core: a raw authenticated GET streamed straight to disk.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use velasona_core::{Invoice, InvoiceId, Page, PageInfo};

use crate::error::{ApiError, ApiResult};
use crate::http::{QueryPairs, StoreClient, parse_envelope};
use crate::services::check_pagination;

/// Wire shape of invoice listings (resource-specific plural key).
#[derive(Deserialize)]
struct InvoiceListWire {
    invoices: Vec<Invoice>,
    pagination: PageInfo,
}

impl StoreClient {
    /// The current user's invoices. `GET /invoices`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn invoices(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult<Page<Invoice>> {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", page);
        pairs.push_opt("limit", limit);
        let wire: InvoiceListWire = self
            .get(&format!("/invoices{}", pairs.to_query_string()))
            .await
            .map_err(|e| e.with_fallback("Failed to load invoices"))?;
        check_pagination(&wire.pagination, "invoices");
        Ok(Page::new(wire.invoices, wire.pagination))
    }

    /// Fetch one invoice. `GET /invoices/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the invoice is unknown.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn invoice(&self, id: &InvoiceId) -> ApiResult<Invoice> {
        self.get(&format!("/invoices/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to load invoice"))
    }

    /// Download an invoice PDF into `dir`. `GET /invoices/:id/pdf`
    ///
    /// The file is named after the invoice's human-facing number
    /// (`INV-0001.pdf`), so the invoice record is fetched first. Returns
    /// the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is unknown, the download fails, or
    /// the file cannot be written.
    #[instrument(skip(self, dir), fields(invoice_id = %id))]
    pub async fn download_invoice_pdf(&self, id: &InvoiceId, dir: &Path) -> ApiResult<PathBuf> {
        let invoice = self.invoice(id).await?;

        let url = format!("{}/invoices/{id}/pdf", self.api_url());
        debug!(%url, "downloading invoice PDF");

        let mut request = self.http().get(&url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();

        if !status.is_success() {
            // The error path still answers in the JSON envelope
            let text = response.text().await.map_err(ApiError::Network)?;
            return match parse_envelope::<serde_json::Value>(status, &text) {
                Ok(_) => Err(ApiError::unexpected(status.as_u16())),
                Err(e) => Err(e.with_fallback("Failed to download invoice")),
            };
        }

        tokio::fs::create_dir_all(dir).await?;
        let dest = dir.join(format!("{}.pdf", invoice.invoice_number));

        // Stream into a temp file and rename, so an interrupted download
        // never leaves a truncated PDF at the destination
        let tmp = dir.join(format!("{}.pdf.part", invoice.invoice_number));
        if let Err(e) = write_body(response, &tmp).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }
        tokio::fs::rename(&tmp, &dest).await?;

        info!(invoice_number = %invoice.invoice_number, dest = %dest.display(), "invoice saved");
        Ok(dest)
    }
}

/// Stream a response body to `path`.
async fn write_body(response: reqwest::Response, path: &Path) -> ApiResult<()> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ApiError::Network)?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}
