//! llseek 测试

use super::*;
use crate::fs::proc::generic_file_llseek;
use crate::vfs::{File, OpenFlags};
use crate::{kassert, test_case};

test_case!(test_generic_llseek_whence, {
    kassert!(generic_file_llseek(7, 3, 0, 0) == Ok(3));
    kassert!(generic_file_llseek(7, 3, 1, 0) == Ok(10));
    kassert!(generic_file_llseek(7, 0, 1, 0) == Ok(7));
    kassert!(generic_file_llseek(7, 4, 2, 0) == Ok(4));
    kassert!(generic_file_llseek(7, 4, 2, 100) == Ok(104));
});

test_case!(test_generic_llseek_rejects_invalid, {
    kassert!(generic_file_llseek(0, -1, 0, 0) == Err(FsError::InvalidArgument));
    kassert!(generic_file_llseek(2, -3, 1, 0) == Err(FsError::InvalidArgument));
    kassert!(generic_file_llseek(0, -1, 2, 0) == Err(FsError::InvalidArgument));
    kassert!(generic_file_llseek(i64::MAX, 1, 1, 0) == Err(FsError::InvalidArgument));
    kassert!(generic_file_llseek(0, 0, 3, 0) == Err(FsError::InvalidArgument));
    // SEEK_DATA / SEEK_HOLE 不支持
    kassert!(generic_file_llseek(0, 0, 4, 0) == Err(FsError::InvalidArgument));
});

test_case!(test_proc_file_lseek_rewinds, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("rewind", rw_mode(), Arc::new(StaticOps(b"data")))
        .unwrap();
    let file = procfs.open("rewind", OpenFlags::O_RDONLY).unwrap();

    let mut mem = [0u8; 8];
    kassert!(file.read(&mut UserBuffer::new(&mut mem)).unwrap() == 4);
    kassert!(file.read(&mut UserBuffer::new(&mut mem)).unwrap() == 0);

    kassert!(file.lseek(0, 0).unwrap() == 0);
    kassert!(file.read(&mut UserBuffer::new(&mut mem)).unwrap() == 4);
});

test_case!(test_proc_file_failed_lseek_keeps_offset, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("keep", rw_mode(), Arc::new(StaticOps(b"data")))
        .unwrap();
    let file = procfs.open("keep", OpenFlags::O_RDONLY).unwrap();

    file.lseek(2, 0).unwrap();
    kassert!(file.lseek(-5, 1).is_err());
    kassert!(file.offset() == 2);
});
