//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod alerts;
pub mod dialog;
pub mod markers;
pub mod mode;
pub mod routes;
pub mod transfer;
pub mod view;
