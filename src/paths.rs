//! Path resolution for todolist data.
//!
//! Provides XDG-compliant path resolution for the default database location.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "todolist";

/// Get XDG-compliant data directory for todolist.
///
/// # Returns
/// `$XDG_DATA_HOME/todolist`, else `~/.local/share/todolist`, or `None` when
/// neither `XDG_DATA_HOME` nor `HOME` is set.
pub fn get_data_dir() -> Option<PathBuf> {
    let data_home = env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))?;

    Some(data_home.join(APP_DIR))
}

/// Get database file path (data_dir/todos.db).
pub fn get_db_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("todos.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(xdg: Option<&str>, home: Option<&str>, f: F) {
        let saved_xdg = env::var_os("XDG_DATA_HOME");
        let saved_home = env::var_os("HOME");
        unsafe {
            match xdg {
                Some(v) => env::set_var("XDG_DATA_HOME", v),
                None => env::remove_var("XDG_DATA_HOME"),
            }
            match home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }

        f();

        // Cleanup
        unsafe {
            match saved_xdg {
                Some(v) => env::set_var("XDG_DATA_HOME", v),
                None => env::remove_var("XDG_DATA_HOME"),
            }
            match saved_home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_xdg_data_home_takes_precedence() {
        with_env(Some("/tmp/xdg"), Some("/home/someone"), || {
            assert_eq!(get_data_dir(), Some(PathBuf::from("/tmp/xdg/todolist")));
        });
    }

    #[test]
    #[serial]
    fn test_falls_back_to_home() {
        with_env(None, Some("/home/someone"), || {
            assert_eq!(
                get_db_path(),
                Some(PathBuf::from("/home/someone/.local/share/todolist/todos.db"))
            );
        });
    }

    #[test]
    #[serial]
    fn test_none_without_home_or_xdg() {
        with_env(None, None, || {
            assert_eq!(get_db_path(), None);
        });
    }
}
