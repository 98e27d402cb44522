// src/tests/common.rs

//! Common `sar` ASCII output used by many tests.

#![allow(dead_code)]

/// One day of `sar -A` output with 12-hour timestamps, a reboot, and every
/// data section.
pub const SAR_DAY_12H: &str = "\
Linux 3.10.0-1160.el7.x86_64 (myhost) \t03/04/2023 \t_x86_64_\t(2 CPU)

12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle
12:10:01 AM     all      1.00      0.00      0.50      0.00      0.00     98.50
12:10:01 AM       0      1.50      0.00      0.60      0.00      0.00     97.90
12:10:01 AM       1      0.50      0.00      0.40      0.00      0.00     99.10
Average:        all      1.00      0.00      0.50      0.00      0.00     98.50
Average:          0      1.50      0.00      0.60      0.00      0.00     97.90
Average:          1      0.50      0.00      0.40      0.00      0.00     99.10

12:00:01 AM kbmemfree kbmemused  %memused kbbuffers  kbcached  kbcommit   %commit
12:10:01 AM    102400    921600     90.00     10240    409600    512000     25.00
Average:       102400    921600     90.00     10240    409600    512000     25.00

12:00:01 AM kbswpfree kbswpused  %swpused  kbswpcad   %swpcad
12:10:01 AM   2097148         4      0.00         0      0.00
Average:      2097148         4      0.00         0      0.00

12:00:01 AM       tps      rtps      wtps   bread/s   bwrtn/s
12:10:01 AM      5.00      1.00      4.00     16.00     64.00
Average:         5.00      1.00      4.00     16.00     64.00

12:00:01 AM  pgpgin/s pgpgout/s   fault/s  majflt/s  pgfree/s pgscank/s pgscand/s pgsteal/s    %vmeff
12:10:01 AM      8.00     32.00    120.00      0.00     60.00      0.00      0.00      0.00      0.00
Average:         8.00     32.00    120.00      0.00     60.00      0.00      0.00      0.00      0.00

12:00:01 AM     IFACE   rxpck/s   txpck/s    rxkB/s    txkB/s   rxcmp/s   txcmp/s  rxmcst/s
12:10:01 AM        lo      1.00      1.00      0.10      0.10      0.00      0.00      0.00
12:10:01 AM      eth0     10.00      8.00      2.50      1.25      0.00      0.00      0.00
Average:           lo      1.00      1.00      0.10      0.10      0.00      0.00      0.00
Average:         eth0     10.00      8.00      2.50      1.25      0.00      0.00      0.00

01:05:01 PM       LINUX RESTART

01:10:01 PM     CPU     %user     %nice   %system   %iowait    %steal     %idle
01:20:01 PM     all      2.00      0.00      1.00      0.00      0.00     97.00
Average:        all      2.00      0.00      1.00      0.00      0.00     97.00

01:10:01 PM kbmemfree kbmemused  %memused kbbuffers  kbcached  kbcommit   %commit
01:20:01 PM    204800    819200     80.00     20480    307200    512000     25.00
Average:       204800    819200     80.00     20480    307200    512000     25.00
";

/// First day of a combined multi-day file, 24-hour timestamps.
pub const SAR_DAY1_24H: &str = "\
Linux 5.14.0-284.el9.x86_64 (myhost) \t2023-03-04 \t_x86_64_\t(2 CPU)

00:00:01        CPU     %user     %nice   %system   %iowait    %steal     %idle
00:10:01        all      1.00      0.00      0.50      0.00      0.00     98.50
Average:        all      1.00      0.00      0.50      0.00      0.00     98.50

00:00:01    kbmemfree kbmemused  %memused kbbuffers  kbcached
00:10:01       102400    921600     90.00     10240    409600
Average:       102400    921600     90.00     10240    409600

";

/// Second day of a combined multi-day file, 24-hour timestamps.
pub const SAR_DAY2_24H: &str = "\
Linux 5.14.0-284.el9.x86_64 (myhost) \t03/05/2023 \t_x86_64_\t(2 CPU)

00:00:01        CPU     %user     %nice   %system   %iowait    %steal     %idle
00:20:01        all      3.00      0.00      1.50      0.00      0.00     95.50
Average:        all      3.00      0.00      1.50      0.00      0.00     95.50

00:00:01    kbmemfree kbmemused  %memused kbbuffers  kbcached
00:20:01       307200    716800     70.00     30720    204800
Average:       307200    716800     70.00     30720    204800
";

/// `sar -u` with 12-hour timestamps either side of noon.
pub const SAR_CPU_AMPM: &str = "\
09:00:01 AM CPU %usr %nice %sys %iowait %idle
09:00:01 AM all 1.00 0.00 0.50 0.00 98.50
01:00:01 PM all 2.00 0.00 1.00 0.00 97.00";

/// `sar -u` header line, 24-hour.
pub const HEADER_CPU_24H: &str =
    "00:00:01        CPU     %user     %nice   %system   %iowait    %steal     %idle";

/// `sar -u` header line, 12-hour.
pub const HEADER_CPU_12H: &str =
    "12:00:01 AM     CPU     %user     %nice   %system   %iowait    %steal     %idle";

/// `sar -r` header line, 24-hour.
pub const HEADER_MEM_24H: &str =
    "00:00:01    kbmemfree kbmemused  %memused kbbuffers  kbcached";

/// `sar -n DEV` header line, 24-hour.
pub const HEADER_NET_24H: &str =
    "00:00:01        IFACE   rxpck/s   txpck/s    rxkB/s    txkB/s   rxcmp/s   txcmp/s  rxmcst/s";

/// Combined two-day file.
pub fn sar_two_days() -> String {
    format!("{}{}", SAR_DAY1_24H, SAR_DAY2_24H)
}
