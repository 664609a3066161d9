//! ProcFS 条目管理测试

use super::*;
use crate::vfs::OpenFlags;
use crate::{kassert, test_case};

test_case!(test_proc_create_and_lookup, {
    let procfs = create_test_procfs();
    let entry = procfs
        .proc_create("sink_net_status", rw_mode(), Arc::new(StaticOps(b"hi")))
        .unwrap();

    kassert!(entry.name() == "sink_net_status");
    kassert!(procfs.lookup("sink_net_status").is_some());
    kassert!(procfs.list() == alloc::vec![alloc::string::String::from("sink_net_status")]);

    let meta = entry.metadata();
    kassert!(meta.size == 0);
    kassert!(meta.mode.permissions() == 0o666);
    kassert!(meta.mode.contains(FileMode::S_IFREG));
});

test_case!(test_proc_create_duplicate, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("dup", rw_mode(), Arc::new(StaticOps(b"")))
        .unwrap();
    let result = procfs.proc_create("dup", rw_mode(), Arc::new(StaticOps(b"")));
    kassert!(matches!(result, Err(FsError::AlreadyExists)));
});

test_case!(test_proc_create_invalid_names, {
    let procfs = create_test_procfs();
    let ops: Arc<dyn ProcOps> = Arc::new(StaticOps(b""));

    kassert!(matches!(
        procfs.proc_create("", rw_mode(), ops.clone()),
        Err(FsError::InvalidArgument)
    ));
    kassert!(matches!(
        procfs.proc_create("a/b", rw_mode(), ops.clone()),
        Err(FsError::InvalidArgument)
    ));

    let long: alloc::string::String = core::iter::repeat_n('x', 256).collect();
    kassert!(matches!(
        procfs.proc_create(&long, rw_mode(), ops),
        Err(FsError::NameTooLong)
    ));
});

test_case!(test_proc_remove_entry, {
    let procfs = create_test_procfs();
    procfs
        .proc_create("gone", rw_mode(), Arc::new(StaticOps(b"x")))
        .unwrap();

    kassert!(procfs.remove_proc_entry("gone").is_ok());
    kassert!(procfs.lookup("gone").is_none());
    kassert!(matches!(procfs.remove_proc_entry("gone"), Err(FsError::NotFound)));
    kassert!(matches!(
        procfs.open("gone", OpenFlags::O_RDONLY),
        Err(FsError::NotFound)
    ));
});

test_case!(test_proc_open_permissions, {
    let procfs = create_test_procfs();
    procfs
        .proc_create(
            "readonly",
            FileMode::from_bits_truncate(0o444),
            Arc::new(StaticOps(b"r")),
        )
        .unwrap();

    kassert!(procfs.open("readonly", OpenFlags::O_RDONLY).is_ok());
    kassert!(matches!(
        procfs.open("readonly", OpenFlags::O_WRONLY),
        Err(FsError::PermissionDenied)
    ));
    kassert!(matches!(
        procfs.open("readonly", OpenFlags::O_RDWR),
        Err(FsError::PermissionDenied)
    ));
});
