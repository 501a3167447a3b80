#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted numbers must carry a matching check digit.
        let check = seikyu::corporate::validate(Some(s));
        if let Some(n) = check.normalized {
            assert!(seikyu::corporate::validate_check_digit(&n));
        }

        let check = seikyu::corporate::validate_registration_number(Some(s));
        if let Some(t) = check.normalized {
            assert!(seikyu::corporate::validate_check_digit(&t[1..]));
        }
    }
});
