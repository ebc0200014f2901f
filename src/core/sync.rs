//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning and other
//! synchronization concerns in a consistent manner across the codebase.

use std::sync::LockResult;

/// Handle poisoned mutex cases with consistent error handling
///
/// This utility function converts mutex poison errors into application-specific
/// errors using a provided error constructor. This ensures consistent error
/// handling across the codebase when mutexes become poisoned due to panics.
///
/// # Arguments
/// * `result` - The result from a mutex lock operation
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Returns
/// The mutex guard on success, or an application error on poison/failure
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use tagfinder::core::sync::handle_mutex_poison;
/// use tagfinder::scanner::api::ScanError;
///
/// let mutex = Mutex::new(Vec::<u32>::new());
/// let mut guard = handle_mutex_poison(
///     mutex.lock(),
///     |message| ScanError::Synchronisation { message }
/// ).unwrap();
/// guard.push(1);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}
