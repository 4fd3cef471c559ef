//! Fetch Adapters
//!
//! Implementations of the PdfFetcher port.

mod reqwest_pdf_fetcher;

pub use reqwest_pdf_fetcher::ReqwestPdfFetcher;
