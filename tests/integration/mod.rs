//! Integration tests for the renderers and the CLI surface

mod art_properties;
mod binary_output;
mod cli_output;
mod cli_parse;
mod config_layers;
mod preview_scenarios;
