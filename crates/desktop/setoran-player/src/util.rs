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

pub trait ResultExt<E> {
    type Ok;

    /// Logs the error with the caller's location and discards it.
    fn log_err(self) -> Option<Self::Ok>;
}

impl<T, E> ResultExt<E> for Result<T, E>
where
    E: std::fmt::Debug,
{
    type Ok = T;

    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let loc = std::panic::Location::caller();
                tracing::error!(
                    error = ?error,
                    caller.file = %loc.file(),
                    caller.line = loc.line(),
                    caller.col = loc.column(),
                    "error"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_passes_through_and_err_becomes_none() {
        setoran_common_telemetry::init_default_ut_logging();
        assert_eq!(Ok::<_, String>(3).log_err(), Some(3));
        assert_eq!(Err::<u8, _>("entity released").log_err(), None);
    }
}
