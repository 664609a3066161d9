// driver/src/log/tests/overflow.rs

use super::*;
use crate::log::config::LOG_BUFFER_ENTRIES;

test_case!(test_overflow_drops_oldest, {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Emergency);

    for i in 0..LOG_BUFFER_ENTRIES + 3 {
        test_log!(log, LogLevel::Info, "entry {}", i);
    }

    kassert!(log.pending() == LOG_BUFFER_ENTRIES);
    kassert!(log.dropped() == 3);

    // 最旧的三条已被覆盖
    kassert!(log.pop().unwrap().message() == "entry 3");
});

test_case!(test_filtered_logs_do_not_count_as_dropped, {
    let log = LogCore::new(LogLevel::Error, LogLevel::Emergency);

    for _ in 0..LOG_BUFFER_ENTRIES * 2 {
        test_log!(log, LogLevel::Info, "ignored");
    }

    kassert!(log.pending() == 0);
    kassert!(log.dropped() == 0);
});
