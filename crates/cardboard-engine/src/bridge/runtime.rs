use thiserror::Error;

/// Status reported by the host runtime, propagated verbatim.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RuntimeAttachError {
    #[error("failed to attach thread to the runtime (status {0})")]
    Attach(i32),
    #[error("failed to detach thread from the runtime (status {0})")]
    Detach(i32),
}

impl RuntimeAttachError {
    pub fn status(&self) -> i32 {
        match *self {
            RuntimeAttachError::Attach(code) | RuntimeAttachError::Detach(code) => code,
        }
    }
}

/// Attach/detach entry points of the host virtual machine.
///
/// Both return the runtime status code: negative on failure.
pub trait VmRuntime {
    fn attach_current_thread(&self) -> i32;
    fn detach_current_thread(&self) -> i32;
}

/// Keeps the current thread attached to the runtime while alive.
///
/// Detaches on drop; a failed detach is logged.
#[must_use = "the thread detaches when the attachment is dropped"]
pub struct ThreadAttachment<'vm, V: VmRuntime + ?Sized> {
    vm: &'vm V,
}

impl<'vm, V: VmRuntime + ?Sized> ThreadAttachment<'vm, V> {
    pub fn new(vm: &'vm V) -> Result<Self, RuntimeAttachError> {
        let status = vm.attach_current_thread();
        if status < 0 {
            return Err(RuntimeAttachError::Attach(status));
        }
        Ok(Self { vm })
    }
}

impl<V: VmRuntime + ?Sized> Drop for ThreadAttachment<'_, V> {
    fn drop(&mut self) {
        let status = self.vm.detach_current_thread();
        if status < 0 {
            log::error!("{}", RuntimeAttachError::Detach(status));
        }
    }
}
