// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, CONFLICT_REPORT_LIMIT};
pub use handlers::{
    MAX_ACCESSIBILITY_LENGTH, PREVIEW_SAMPLE_LIMIT, build_bulk_create_request, build_grid,
    expiry_status, preview_bulk, rank_locations, validate_bulk_defaults,
    validate_template_request, warehouse_stats,
};
pub use request_response::{
    BulkCreateRequest, BulkDefaults, BulkPreviewResponse, ExpiryResponse, GridCell,
    GridLayerResponse, LocationSuggestion, SuggestionRequest, SuggestionResponse,
    TemplateValidationResponse,
};
