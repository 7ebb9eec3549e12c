//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// USER STATES
// =============================================================================

/// User account states
pub mod user_states {
    pub const DISABLED: i32 = 0;
    pub const ACTIVE: i32 = 1;
}

// =============================================================================
// QUIZZES
// =============================================================================

/// Length of a generated quiz invite code
pub const INVITE_CODE_LENGTH: usize = 8;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/v1";

/// Personal area base path
pub const PERSONAL_BASE_PATH: &str = "/personal";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length of names (users, subjects, topics, issues)
pub const MAX_NAME_LENGTH: u64 = 255;

/// Maximum subject description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum question text length
pub const MAX_QUESTION_TEXT_LENGTH: u64 = 65535;

/// Maximum answer text length
pub const MAX_ANSWER_TEXT_LENGTH: u64 = 4096;

/// Maximum time limit in seconds (issue standards)
pub const MAX_TIME_LIMIT_SECONDS: i32 = 24 * 60 * 60;

/// Maximum number of questions in an issue
pub const MAX_QUESTIONS_NUMBER: i32 = 1000;
