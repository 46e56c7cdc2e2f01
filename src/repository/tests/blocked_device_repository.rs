mod block_device_tests {
    use crate::repository::blocked_device_repository::{
        block_device, get_all_blocked_devices, get_blocked_device, unblock_device,
    };
    use crate::repository::open_connection;
    use crate::test::*;

    #[test]
    fn block_device_then_get() {
        init_db_folder();
        let con = open_connection().unwrap();
        block_device("deviceA", Some("spam"), &con).unwrap();
        let blocked = get_blocked_device("deviceA", &con).unwrap().unwrap();
        let other = get_blocked_device("deviceB", &con).unwrap();
        con.close().unwrap();
        assert_eq!("deviceA", blocked.device_id);
        assert_eq!(Some("spam".to_string()), blocked.reason);
        assert!(other.is_none());
        cleanup();
    }

    #[test]
    fn block_device_twice_replaces_reason() {
        init_db_folder();
        let con = open_connection().unwrap();
        block_device("deviceA", Some("spam"), &con).unwrap();
        block_device("deviceA", None, &con).unwrap();
        let all = get_all_blocked_devices(&con).unwrap();
        con.close().unwrap();
        assert_eq!(1, all.len());
        assert_eq!(None, all[0].reason);
        cleanup();
    }

    #[test]
    fn unblock_device_removes_entry() {
        init_db_folder();
        let con = open_connection().unwrap();
        block_device("deviceA", None, &con).unwrap();
        unblock_device("deviceA", &con).unwrap();
        // unblocking something that isn't blocked is fine
        unblock_device("deviceB", &con).unwrap();
        let blocked = get_blocked_device("deviceA", &con).unwrap();
        con.close().unwrap();
        assert!(blocked.is_none());
        cleanup();
    }
}
