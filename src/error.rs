use crate::kernel::KernelError;

/// Process exit code for file I/O and serialization failures.
pub const EXIT_IO: u8 = 2;
/// Process exit code for kernel parameters that cannot produce a valid kernel.
pub const EXIT_INVALID_KERNEL: u8 = 3;
/// Process exit code for malformed inputs read back from disk.
pub const EXIT_INVALID_DATA: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<KernelError> for AppError {
    fn from(err: KernelError) -> Self {
        Self::new(EXIT_INVALID_KERNEL, format!("Invalid kernel: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_errors_map_to_invalid_kernel_exit_code() {
        let err: AppError = KernelError::InvalidKernelSize { len: 4 }.into();
        assert_eq!(err.exit_code(), EXIT_INVALID_KERNEL);
        assert!(err.to_string().contains("4"), "message should carry the length: {err}");
    }
}
