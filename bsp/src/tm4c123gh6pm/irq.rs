// Copyright (c) 2025 vivo Mobile Communication Co., Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(dead_code)]
#![allow(non_upper_case_globals)]
use crate::arch::IrqNumber;

// PWM1 (134 and up) sits past the four enable banks and is not wired
// through this driver.
const fn irq(number: u16) -> IrqNumber {
    match IrqNumber::new(number) {
        Ok(irq) => irq,
        Err(_) => panic!("IRQ out of range"),
    }
}

pub const GPIOA_IRQn: IrqNumber = irq(0);
pub const GPIOB_IRQn: IrqNumber = irq(1);
pub const GPIOC_IRQn: IrqNumber = irq(2);
pub const GPIOD_IRQn: IrqNumber = irq(3);
pub const GPIOE_IRQn: IrqNumber = irq(4);
pub const UART0_IRQn: IrqNumber = irq(5);
pub const UART1_IRQn: IrqNumber = irq(6);
pub const SSI0_IRQn: IrqNumber = irq(7);
pub const I2C0_IRQn: IrqNumber = irq(8);
pub const PWM0_FAULT_IRQn: IrqNumber = irq(9);
pub const PWM0_0_IRQn: IrqNumber = irq(10);
pub const PWM0_1_IRQn: IrqNumber = irq(11);
pub const PWM0_2_IRQn: IrqNumber = irq(12);
pub const QEI0_IRQn: IrqNumber = irq(13);
pub const ADC0SS0_IRQn: IrqNumber = irq(14);
pub const ADC0SS1_IRQn: IrqNumber = irq(15);
pub const ADC0SS2_IRQn: IrqNumber = irq(16);
pub const ADC0SS3_IRQn: IrqNumber = irq(17);
pub const WATCHDOG0_IRQn: IrqNumber = irq(18);
pub const TIMER0A_IRQn: IrqNumber = irq(19);
pub const TIMER0B_IRQn: IrqNumber = irq(20);
pub const TIMER1A_IRQn: IrqNumber = irq(21);
pub const TIMER1B_IRQn: IrqNumber = irq(22);
pub const TIMER2A_IRQn: IrqNumber = irq(23);
pub const TIMER2B_IRQn: IrqNumber = irq(24);
pub const COMP0_IRQn: IrqNumber = irq(25);
pub const COMP1_IRQn: IrqNumber = irq(26);
pub const SYSCTL_IRQn: IrqNumber = irq(28);
pub const FLASH_IRQn: IrqNumber = irq(29);
pub const GPIOF_IRQn: IrqNumber = irq(30);
pub const UART2_IRQn: IrqNumber = irq(33);
pub const SSI1_IRQn: IrqNumber = irq(34);
pub const TIMER3A_IRQn: IrqNumber = irq(35);
pub const TIMER3B_IRQn: IrqNumber = irq(36);
pub const I2C1_IRQn: IrqNumber = irq(37);
pub const QEI1_IRQn: IrqNumber = irq(38);
pub const CAN0_IRQn: IrqNumber = irq(39);
pub const CAN1_IRQn: IrqNumber = irq(40);
pub const HIBERNATE_IRQn: IrqNumber = irq(43);
pub const USB0_IRQn: IrqNumber = irq(44);
pub const PWM0_3_IRQn: IrqNumber = irq(45);
pub const UDMA_IRQn: IrqNumber = irq(46);
pub const UDMAERR_IRQn: IrqNumber = irq(47);
pub const ADC1SS0_IRQn: IrqNumber = irq(48);
pub const ADC1SS1_IRQn: IrqNumber = irq(49);
pub const ADC1SS2_IRQn: IrqNumber = irq(50);
pub const ADC1SS3_IRQn: IrqNumber = irq(51);
pub const SSI2_IRQn: IrqNumber = irq(57);
pub const SSI3_IRQn: IrqNumber = irq(58);
pub const UART3_IRQn: IrqNumber = irq(59);
pub const UART4_IRQn: IrqNumber = irq(60);
pub const UART5_IRQn: IrqNumber = irq(61);
pub const UART6_IRQn: IrqNumber = irq(62);
pub const UART7_IRQn: IrqNumber = irq(63);
pub const I2C2_IRQn: IrqNumber = irq(68);
pub const I2C3_IRQn: IrqNumber = irq(69);
pub const TIMER4A_IRQn: IrqNumber = irq(70);
pub const TIMER4B_IRQn: IrqNumber = irq(71);
pub const TIMER5A_IRQn: IrqNumber = irq(92);
pub const TIMER5B_IRQn: IrqNumber = irq(93);
pub const WTIMER0A_IRQn: IrqNumber = irq(94);
pub const WTIMER0B_IRQn: IrqNumber = irq(95);
pub const WTIMER1A_IRQn: IrqNumber = irq(96);
pub const WTIMER1B_IRQn: IrqNumber = irq(97);
pub const WTIMER2A_IRQn: IrqNumber = irq(98);
pub const WTIMER2B_IRQn: IrqNumber = irq(99);
pub const WTIMER3A_IRQn: IrqNumber = irq(100);
pub const WTIMER3B_IRQn: IrqNumber = irq(101);
pub const WTIMER4A_IRQn: IrqNumber = irq(102);
pub const WTIMER4B_IRQn: IrqNumber = irq(103);
pub const WTIMER5A_IRQn: IrqNumber = irq(104);
pub const WTIMER5B_IRQn: IrqNumber = irq(105);
pub const SYSEXC_IRQn: IrqNumber = irq(106);
