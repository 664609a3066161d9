//! ProcFile 会话读写测试

use super::*;
use crate::vfs::{File, OpenFlags};
use crate::{kassert, test_case};

test_case!(test_proc_file_read_advances_offset, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("hello", rw_mode(), Arc::new(StaticOps(b"hello proc")))
        .unwrap();
    let file = procfs.open("hello", OpenFlags::O_RDONLY).unwrap();

    let mut mem = [0u8; 5];
    kassert!(file.read(&mut UserBuffer::new(&mut mem)).unwrap() == 5);
    kassert!(&mem == b"hello");
    kassert!(file.offset() == 5);

    let mut rest = [0u8; 32];
    kassert!(file.read(&mut UserBuffer::new(&mut rest)).unwrap() == 5);
    kassert!(&rest[..5] == b" proc");
    kassert!(file.read(&mut UserBuffer::new(&mut rest)).unwrap() == 0);
});

test_case!(test_proc_sessions_have_independent_offsets, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("shared", rw_mode(), Arc::new(StaticOps(b"abc")))
        .unwrap();
    let a = procfs.open("shared", OpenFlags::O_RDONLY).unwrap();
    let b = procfs.open("shared", OpenFlags::O_RDONLY).unwrap();

    let mut mem = [0u8; 8];
    a.read(&mut UserBuffer::new(&mut mem)).unwrap();
    kassert!(a.offset() == 3);
    kassert!(b.offset() == 0);
});

test_case!(test_proc_file_write_reaches_ops, {
    let procfs = create_test_procfs();
    let ops = Arc::new(RecordingOps::default());
    procfs.proc_create("sink", rw_mode(), ops.clone()).unwrap();
    let file = procfs.open("sink", OpenFlags::O_WRONLY).unwrap();

    kassert!(file.write(&UserSlice::new(b"1 2")).unwrap() == 3);
    kassert!(ops.last.lock().as_slice() == b"1 2");
    kassert!(file.offset() == 3);
});

test_case!(test_proc_file_access_mode_enforced, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("rw", rw_mode(), Arc::new(RecordingOps::default()))
        .unwrap();

    let ro = procfs.open("rw", OpenFlags::O_RDONLY).unwrap();
    kassert!(matches!(
        ro.write(&UserSlice::new(b"x")),
        Err(FsError::BadFileDescriptor)
    ));

    let wo = procfs.open("rw", OpenFlags::O_WRONLY).unwrap();
    let mut mem = [0u8; 4];
    kassert!(matches!(
        wo.read(&mut UserBuffer::new(&mut mem)),
        Err(FsError::BadFileDescriptor)
    ));
});

test_case!(test_proc_default_write_is_io_error, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("static", rw_mode(), Arc::new(StaticOps(b"s")))
        .unwrap();
    let file = procfs.open("static", OpenFlags::O_RDWR).unwrap();
    kassert!(matches!(
        file.write(&UserSlice::new(b"x")),
        Err(FsError::IoError)
    ));
});

test_case!(test_proc_open_session_after_remove, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("transient", rw_mode(), Arc::new(StaticOps(b"t")))
        .unwrap();
    let file = procfs.open("transient", OpenFlags::O_RDWR).unwrap();
    procfs.remove_proc_entry("transient").unwrap();

    let mut mem = [0u8; 4];
    kassert!(matches!(
        file.read(&mut UserBuffer::new(&mut mem)),
        Err(FsError::IoError)
    ));
    kassert!(matches!(file.lseek(0, 0), Err(FsError::IoError)));
    kassert!(file.entry().is_removed());
});
