cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = console)]
            pub fn log(s: &str);
        }
    } else {
        pub fn log(s: &str) {
            println!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.3f"), s);
        }
    }
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::console::log(&format_args!($($t)*).to_string()))
}

pub(crate) use console_log;
