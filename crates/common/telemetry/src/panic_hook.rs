// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Panic hook that routes panics through `tracing` before the default hook
//! runs, so a crash on the UI or audio thread ends up in the log files.

use std::{
    panic,
    sync::atomic::{AtomicUsize, Ordering},
};

use backtrace::Backtrace;

static PANIC_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Number of panics observed since the hook was installed.
pub fn panic_count() -> usize { PANIC_COUNT.load(Ordering::Relaxed) }

/// Replace the panic hook with one that logs the panic message, location,
/// thread name and backtrace as a structured `error!` event, then chains to
/// the previous hook.
pub fn set_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic| {
        let backtrace = format!("{:?}", Backtrace::new());
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("<unnamed>");
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                backtrace = %backtrace,
                thread = thread_name,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic, backtrace = %backtrace, thread = thread_name);
        }
        PANIC_COUNT.fetch_add(1, Ordering::Relaxed);
        default_hook(panic);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panics_are_counted() {
        set_panic_hook();
        let before = panic_count();
        let result = std::thread::Builder::new()
            .name("panicking-worker".to_string())
            .spawn(|| panic!("boom"))
            .unwrap()
            .join();
        assert!(result.is_err());
        assert!(panic_count() > before);
        let _ = panic::take_hook();
    }
}
