use loader_engine::{HostEnvironment, StandaloneHost};

/// The game host when this module runs inside it, a standalone host
/// otherwise.
pub fn detect() -> Box<dyn HostEnvironment> {
    #[cfg(windows)]
    match game_host::Mq2Host::attach() {
        Ok(host) => return Box::new(host),
        Err(e) => eprintln!("{} is not loaded ({}), running standalone", game_host::HOST_MODULE, e),
    }

    Box::new(StandaloneHost::from_env())
}

#[cfg(windows)]
mod game_host {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;

    use libloading::os::windows::Library;
    use liblogger::log_warn;
    use loader_engine::HostEnvironment;

    pub const HOST_MODULE: &str = "MQ2Main.dll";
    const INI_PATH_EXPORT: &[u8] = b"gszINIPath\0";
    const WRITE_CHAT_EXPORT: &[u8] = b"WriteChatf\0";

    type WriteChatfFn = unsafe extern "C" fn(format: *const c_char, ...);

    /// Services exported by the already-loaded `MQ2Main.dll`.
    pub struct Mq2Host {
        module: Library,
    }

    impl Mq2Host {
        pub fn attach() -> Result<Self, libloading::Error> {
            let module = Library::open_already_loaded(HOST_MODULE)?;
            Ok(Mq2Host { module })
        }
    }

    impl HostEnvironment for Mq2Host {
        fn base_dir(&self) -> String {
            // `gszINIPath` is a char array, so the symbol address is the string.
            match unsafe { self.module.get::<*const c_char>(INI_PATH_EXPORT) } {
                Ok(symbol) if !symbol.is_null() => unsafe { CStr::from_ptr(*symbol) }.to_string_lossy().into_owned(),
                _ => {
                    log_warn!("MQ2Main.dll does not export gszINIPath");
                    String::new()
                }
            }
        }

        fn write_chat(&self, line: &str) {
            let line = match CString::new(line.replace('\0', " ")) {
                Ok(line) => line,
                Err(_) => return,
            };

            match unsafe { self.module.get::<WriteChatfFn>(WRITE_CHAT_EXPORT) } {
                Ok(write_chatf) => unsafe { write_chatf(b"%s\0".as_ptr().cast(), line.as_ptr()) },
                Err(_) => log_warn!("MQ2Main.dll does not export WriteChatf", Some(line.to_string_lossy().into_owned())),
            }
        }
    }
}
