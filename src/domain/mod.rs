//! Domain Layer
//!
//! Pure deployment model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Labels, parameter sets, deployment request/response types
//! - `services/` - Normalization of raw CLI values
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
