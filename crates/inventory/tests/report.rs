use coursework_inventory::{
    Cpu, Device, Gpu, Hdd, Inventory, Load, Processing, Ssd, Sshd, Storage,
};

fn workstation() -> Inventory {
    let mut inventory = Inventory::new();

    let cpu = Processing::new(Load::new(70.0, 40.0).unwrap(), 3.5, 8).unwrap();
    inventory.push("CPU", Cpu::new(cpu, 1, 16));

    let gpu = Processing::new(Load::new(130.0, 60.0).unwrap(), 1.5, 2048).unwrap();
    inventory.push("GPU", Gpu::new(gpu, 448.0).unwrap());

    let hdd = Storage::new(Load::new(9.0, 30.0).unwrap(), 1000.0, 150.0, "SATA").unwrap();
    inventory.push("HDD", Hdd::new(hdd, 7200, 64));

    let ssd = Storage::new(Load::new(2.5, 20.0).unwrap(), 500.0, 550.0, "NVMe").unwrap();
    inventory.push("SSD", Ssd::new(ssd, "TLC"));

    let sshd = Storage::new(Load::new(9.0, 50.0).unwrap(), 2000.0, 200.0, "SATA").unwrap();
    inventory.push("SSHD", Sshd::new(sshd, 7200, 64, "MLC"));

    inventory
}

#[test]
fn full_report() {
    let expected = "\
CPU status:
Power draw: 70 W, Processing load: 40%
Frequency: 3.5 GHz, Cores: 8
CPU - Processor number: 1, L3 cache: 16 MB

GPU status:
Power draw: 130 W, Processing load: 60%
Frequency: 1.5 GHz, Cores: 2048
GPU - Memory bandwidth: 448 GB/s

HDD status:
Power draw: 9 W, Processing load: 30%
Capacity: 1000 GB, Speed: 150 MB/s, Interface: SATA
Rotation speed: 7200 rpm, Cache: 64 MB

SSD status:
Power draw: 2.5 W, Processing load: 20%
Capacity: 500 GB, Speed: 550 MB/s, Interface: NVMe
Memory type: TLC

SSHD status:
Power draw: 9 W, Processing load: 50%
Capacity: 2000 GB, Speed: 200 MB/s, Interface: SATA
Rotation speed: 7200 rpm, Cache: 64 MB
Memory type: MLC";

    assert_eq!(workstation().report().join("\n"), expected);
}

#[test]
fn kinds_in_order() {
    let kinds: Vec<_> = workstation().iter().map(|e| e.component().kind()).collect();
    assert_eq!(kinds, ["CPU", "GPU", "HDD", "SSD", "SSHD"]);
}
