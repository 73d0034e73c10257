#![no_main]
use dynvalue::Value;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let _ = value.description();
    for converting in [false, true] {
        let _ = value.as_bool(converting);
        let _ = value.as_int(converting);
        let _ = value.as_double(converting);
        let _ = value.as_string(converting);
        let _ = value.as_binary(converting);
        let _ = value.as_array(converting);
        let _ = value.as_map(converting);
    }
    if let Ok(mapped) = dynvalue::to_value(&value) {
        let _ = dynvalue::from_value::<Value>(mapped);
    }
    let json = serde_json::Value::from(value.clone());
    let _ = Value::from(json);
});
