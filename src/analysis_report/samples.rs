//! Canned sample programs offered by the submission editor

use std::fmt;
use std::str::FromStr;

/// The three sample programs, from benign to hostile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Harmless,
    Suspicious,
    Malicious,
}

impl SampleKind {
    pub const ALL: [SampleKind; 3] = [
        SampleKind::Harmless,
        SampleKind::Suspicious,
        SampleKind::Malicious,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SampleKind::Harmless => "harmless",
            SampleKind::Suspicious => "suspicious",
            SampleKind::Malicious => "malicious",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SampleKind::Harmless => HARMLESS,
            SampleKind::Suspicious => SUSPICIOUS,
            SampleKind::Malicious => MALICIOUS,
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SampleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("Unknown sample: {}", s))
    }
}

/// Sample code for an editor key; unknown keys yield the empty string
pub fn sample_code(key: &str) -> &'static str {
    key.parse::<SampleKind>().map(SampleKind::code).unwrap_or("")
}

const HARMLESS: &str = r#"# Harmless sample code
# This code calculates and prints the Fibonacci sequence

def fibonacci(n):
    """Generate fibonacci sequence up to n"""
    a, b = 0, 1
    while a < n:
        yield a
        a, b = b, a + b

# Generate first 20 Fibonacci numbers
print("Fibonacci sequence:")
for number in fibonacci(100):
    print(number, end=' ')
"#;

const SUSPICIOUS: &str = r#"# Suspicious sample code - for testing purposes only!
# This code attempts to access system information

import os
import platform
import socket

# Get system info
print("Operating system:", platform.system())
print("Machine:", platform.machine())
print("Node:", platform.node())

# Try to list files in current directory
print("\nFiles in current directory:")
for file in os.listdir('.'):
    print(f"- {file}")

# Try to get network info
hostname = socket.gethostname()
ip = socket.gethostbyname(hostname)
print(f"\nHostname: {hostname}")
print(f"IP Address: {ip}")
"#;

const MALICIOUS: &str = r#"# Potentially malicious sample code - for testing purposes only!
# This code tries to perform actions that might be considered malicious

import os
import sys
import socket
import subprocess
import base64

# Try to create a file
try:
    with open('test_malware_file.txt', 'w') as f:
        f.write('This is a test file created by the sample code')
    print("Created test file")
except:
    print("Failed to create file")

# Try to execute a system command
try:
    result = subprocess.check_output('whoami', shell=True)
    print(f"Executed command: {result.decode().strip()}")
except:
    print("Failed to execute command")

# Try to establish a network connection (will fail in sandbox)
try:
    s = socket.socket(socket.AF_INET, socket.SOCK_STREAM)
    s.connect(('example.com', 80))
    s.send(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n")
    print("Established network connection")
    s.close()
except:
    print("Failed to establish network connection")

# Base64 encoded string (often used in malware for obfuscation)
encoded = base64.b64encode(b'This is a test of obfuscation techniques').decode()
print(f"Encoded string: {encoded}")
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert!(sample_code("harmless").contains("fibonacci"));
        assert!(sample_code("suspicious").contains("platform.system()"));
        assert!(sample_code("malicious").contains("subprocess.check_output"));
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert_eq!(sample_code("ransomware"), "");
        assert_eq!(sample_code(""), "");
        assert_eq!(sample_code("Harmless"), "");
    }

    #[test]
    fn test_escape_sequences_are_literal() {
        // The samples are Python source, so escapes stay as text
        assert!(SUSPICIOUS.contains(r"\nFiles in current directory:"));
        assert!(MALICIOUS.contains(r"\r\nHost: example.com"));
    }

    #[test]
    fn test_from_str_round_trip_keys() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.key().parse::<SampleKind>().unwrap(), kind);
        }
    }
}
