//! # auth-service
//!
//! Application layer containing the credential and token use cases and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CredentialService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    TokenService,
};
