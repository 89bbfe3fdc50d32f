pub mod configuration;
pub mod demo;
pub mod domain;
pub mod object_mapper;
pub mod rest_client;
pub mod telemetry;
pub mod uri_builder;
