// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-class hardware tables.
//!
//! PCI headers and module lists are lifted from real inventories of
//! the instance classes being simulated; device counts are weighted
//! roughly like the fleets observed in production datastores.

use cs_core::Choice;

pub(crate) struct KindTable {
    pub pci_header: &'static [&'static str],
    pub pci_bus: u32,
    pub pci_slot: u32,
    pub mod_list: &'static [&'static str],
}

pub(crate) const TINY: KindTable = KindTable {
    pci_header: &[
        "00:00.0 Host bridge: Intel Corporation 440FX - 82441FX PMC [Natoma] (rev 02)",
        "00:01.0 ISA bridge: Intel Corporation 82371SB PIIX3 ISA [Natoma/Triton II]",
        "00:02.0 VGA compatible controller: Cirrus Logic GD 5446",
        "00:03.0 Unassigned class [ff80]: XenSource, Inc. Xen Platform Device (rev 01)",
    ],
    pci_bus: 0,
    pci_slot: 4,
    mod_list: &[
        "aesni_intel",
        "af_packet",
        "ahci",
        "ata_generic",
        "ata_piix",
        "blake2b_generic",
        "btrfs",
        "button",
        "cirrus",
        "configfs",
        "crc32c_intel",
        "crc32_pclmul",
        "crc64",
        "crc64_rocksoft",
        "crc64_rocksoft_generic",
        "cryptd",
        "crypto_simd",
        "dmi_sysfs",
        "dm_log",
        "dm_mirror",
        "dm_mod",
        "dm_region_hash",
        "fat",
        "fuse",
        "ghash_clmulni_intel",
        "i2c_piix4",
        "intel_rapl_common",
        "intel_rapl_msr",
        "intel_uncore_frequency_common",
        "ip_tables",
        "iscsi_boot_sysfs",
        "iscsi_ibft",
        "libahci",
        "libata",
        "libcrc32c",
        "nls_cp437",
        "nls_iso8859_1",
        "pcspkr",
        "raid6_pq",
        "rfkill",
        "scsi_mod",
        "sd_mod",
        "serio_raw",
        "sg",
        "sha1_ssse3",
        "sha256_ssse3",
        "sha512_ssse3",
        "sunrpc",
        "t10_pi",
        "vfat",
        "xen_blkfront",
        "xen_netfront",
        "xfs",
        "xor",
        "x_tables",
    ],
};

pub(crate) const SMALL: KindTable = KindTable {
    pci_header: &[
        "00:00.0 Host bridge: Intel Corporation 440FX - 82441FX PMC [Natoma]",
        "00:01.0 ISA bridge: Intel Corporation 82371SB PIIX3 ISA [Natoma/Triton II]",
        "00:03.0 VGA compatible controller: Amazon.com, Inc. Device 1111",
    ],
    pci_bus: 0,
    pci_slot: 4,
    mod_list: &[
        "aesni_intel",
        "af_packet",
        "button",
        "configfs",
        "crc32c_intel",
        "crc32_pclmul",
        "crc64",
        "crc64_rocksoft",
        "crc64_rocksoft_generic",
        "cryptd",
        "crypto_simd",
        "dmi_sysfs",
        "dm_log",
        "dm_mirror",
        "dm_mod",
        "dm_region_hash",
        "efivarfs",
        "ena",
        "fat",
        "fuse",
        "ghash_clmulni_intel",
        "i2c_piix4",
        "intel_rapl_common",
        "intel_rapl_msr",
        "intel_uncore_frequency_common",
        "ip_tables",
        "iscsi_boot_sysfs",
        "iscsi_ibft",
        "libcrc32c",
        "libnvdimm",
        "nfit",
        "nls_cp437",
        "nls_iso8859_1",
        "nvme",
        "nvme_auth",
        "nvme_core",
        "parport",
        "parport_pc",
        "pcspkr",
        "ppdev",
        "rfkill",
        "serio_raw",
        "sha1_ssse3",
        "sha256_ssse3",
        "sha512_ssse3",
        "sunrpc",
        "t10_pi",
        "vfat",
        "xfs",
        "x_tables",
    ],
};

pub(crate) const MEDIUM: KindTable = KindTable {
    pci_header: &[
        "00:00.0 Host bridge: Intel Corporation 440FX - 82441FX PMC [Natoma]",
        "00:01.0 ISA bridge: Intel Corporation 82371SB PIIX3 ISA [Natoma/Triton II]",
        "00:03.0 VGA compatible controller: Amazon.com, Inc. Device 1111",
    ],
    pci_bus: 0,
    pci_slot: 4,
    mod_list: &[
        "aesni_intel",
        "af_packet",
        "blake2b_generic",
        "btrfs",
        "button",
        "configfs",
        "crc32c_intel",
        "crc32_pclmul",
        "crc64",
        "crc64_rocksoft",
        "crc64_rocksoft_generic",
        "cryptd",
        "crypto_simd",
        "dmi_sysfs",
        "dm_log",
        "dm_mirror",
        "dm_mod",
        "dm_region_hash",
        "efivarfs",
        "ena",
        "fat",
        "fuse",
        "ghash_clmulni_intel",
        "i2c_piix4",
        "intel_rapl_common",
        "intel_rapl_msr",
        "intel_uncore_frequency_common",
        "ip_tables",
        "iscsi_boot_sysfs",
        "iscsi_ibft",
        "libcrc32c",
        "libnvdimm",
        "nfit",
        "nls_cp437",
        "nls_iso8859_1",
        "nvme",
        "nvme_auth",
        "nvme_core",
        "nvme_keyring",
        "parport",
        "parport_pc",
        "pcspkr",
        "ppdev",
        "raid6_pq",
        "rfkill",
        "serio_raw",
        "sha1_ssse3",
        "sha256_ssse3",
        "sha512_ssse3",
        "sunrpc",
        "t10_pi",
        "vfat",
        "xfs",
        "xor",
        "x_tables",
    ],
};

pub(crate) const LARGE: KindTable = KindTable {
    pci_header: &[
        "00:00.0 Host bridge: Intel Corporation 440FX - 82441FX PMC [Natoma]",
        "00:01.0 ISA bridge: Intel Corporation 82371SB PIIX3 ISA [Natoma/Triton II]",
        "00:03.0 VGA compatible controller: Amazon.com, Inc. Device 1111",
    ],
    pci_bus: 0,
    pci_slot: 4,
    mod_list: &[
        "aesni_intel",
        "af_packet",
        "blake2b_generic",
        "btrfs",
        "button",
        "configfs",
        "crc32c_intel",
        "crc32_pclmul",
        "crc64",
        "crc64_rocksoft",
        "crc64_rocksoft_generic",
        "cryptd",
        "crypto_simd",
        "dmi_sysfs",
        "dm_log",
        "dm_mirror",
        "dm_mod",
        "dm_region_hash",
        "efivarfs",
        "ena",
        "fat",
        "fuse",
        "ghash_clmulni_intel",
        "i2c_piix4",
        "intel_rapl_common",
        "intel_rapl_msr",
        "intel_uncore_frequency_common",
        "ip_tables",
        "iscsi_boot_sysfs",
        "iscsi_ibft",
        "libcrc32c",
        "libnvdimm",
        "nfit",
        "nls_cp437",
        "nls_iso8859_1",
        "nvme",
        "nvme_auth",
        "nvme_core",
        "nvme_keyring",
        "parport",
        "parport_pc",
        "pcspkr",
        "ppdev",
        "raid6_pq",
        "rfkill",
        "serio_raw",
        "sha1_ssse3",
        "sha256_ssse3",
        "sha512_ssse3",
        "sunrpc",
        "t10_pi",
        "vfat",
        "xfs",
        "xor",
        "x_tables",
    ],
};

// Bare-metal hosts carry the NVMe and ENA stacks of the large class
// plus the platform management modules virtual guests never load.
pub(crate) const METAL: KindTable = KindTable {
    pci_header: &[
        "00:00.0 Host bridge: Intel Corporation Sky Lake-E DMI3 Registers (rev 04)",
        "00:05.0 System peripheral: Intel Corporation Sky Lake-E MM/Vt-d Configuration Registers (rev 04)",
        "00:14.0 USB controller: Intel Corporation C620 Series Chipset Family USB 3.0 xHCI Controller (rev 09)",
        "00:16.0 Communication controller: Intel Corporation C620 Series Chipset Family MEI Controller #1 (rev 09)",
        "00:1f.0 ISA bridge: Intel Corporation C621 Series Chipset LPC/eSPI Controller (rev 09)",
        "02:00.0 VGA compatible controller: Matrox Electronics Systems Ltd. Integrated Matrox G200eW3 Graphics Controller (rev 04)",
    ],
    pci_bus: 3,
    pci_slot: 0,
    mod_list: &[
        "acpi_pad",
        "aesni_intel",
        "af_packet",
        "ahci",
        "blake2b_generic",
        "btrfs",
        "button",
        "configfs",
        "crc32c_intel",
        "crc32_pclmul",
        "crc64",
        "crc64_rocksoft",
        "crc64_rocksoft_generic",
        "cryptd",
        "crypto_simd",
        "dcdbas",
        "dmi_sysfs",
        "dm_log",
        "dm_mirror",
        "dm_mod",
        "dm_region_hash",
        "efivarfs",
        "ena",
        "fat",
        "fuse",
        "ghash_clmulni_intel",
        "i2c_i801",
        "intel_rapl_common",
        "intel_rapl_msr",
        "intel_uncore_frequency",
        "intel_uncore_frequency_common",
        "ipmi_devintf",
        "ipmi_msghandler",
        "ipmi_si",
        "ipmi_ssif",
        "ip_tables",
        "iscsi_boot_sysfs",
        "iscsi_ibft",
        "isst_if_common",
        "libahci",
        "libata",
        "libcrc32c",
        "libnvdimm",
        "mei",
        "mei_me",
        "mgag200",
        "nfit",
        "nls_cp437",
        "nls_iso8859_1",
        "nvme",
        "nvme_auth",
        "nvme_core",
        "nvme_keyring",
        "pcspkr",
        "raid6_pq",
        "rfkill",
        "serio_raw",
        "sha1_ssse3",
        "sha256_ssse3",
        "sha512_ssse3",
        "skx_edac",
        "sunrpc",
        "t10_pi",
        "vfat",
        "x86_pkg_temp_thermal",
        "xfs",
        "xor",
        "x_tables",
    ],
};

// weighted choice of number of disks for a small client
pub(crate) fn small_disk_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 60, value: 1 },
        Choice { weight: 30, value: 2 },
        Choice { weight: 10, value: 3 },
    ]
}

// weighted choice of number of disks for a medium client
pub(crate) fn medium_disk_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 45, value: 1 },
        Choice { weight: 35, value: 2 },
        Choice { weight: 20, value: 3 },
    ]
}

pub(crate) fn medium_gpu_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 85, value: 0 },
        Choice { weight: 10, value: 1 },
        Choice { weight: 5, value: 2 },
    ]
}

// weighted choice of number of disks for a large client
pub(crate) fn large_disk_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 20, value: 1 },
        Choice { weight: 50, value: 2 },
        Choice { weight: 20, value: 3 },
        Choice { weight: 10, value: 4 },
    ]
}

// weighted choice of number of GPUs for a large client
pub(crate) fn large_gpu_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 45, value: 0 },
        Choice { weight: 15, value: 1 },
        Choice { weight: 15, value: 2 },
        Choice { weight: 15, value: 4 },
        Choice { weight: 10, value: 8 },
    ]
}

pub(crate) fn metal_disk_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 30, value: 2 },
        Choice { weight: 40, value: 4 },
        Choice { weight: 20, value: 8 },
        Choice { weight: 10, value: 16 },
    ]
}

pub(crate) fn metal_gpu_choices() -> Vec<Choice<u32>> {
    vec![
        Choice { weight: 50, value: 0 },
        Choice { weight: 20, value: 2 },
        Choice { weight: 15, value: 4 },
        Choice { weight: 15, value: 8 },
    ]
}

pub(crate) fn metal_net_choices() -> Vec<Choice<u32>> {
    vec![Choice { weight: 70, value: 2 }, Choice { weight: 30, value: 4 }]
}
