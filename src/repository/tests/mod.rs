mod blocked_device_repository;
